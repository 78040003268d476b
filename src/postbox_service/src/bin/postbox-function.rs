use color_eyre::eyre::Result;
use postbox_adapters::{
    config::PostboxSettings,
    function::{FunctionEvent, handle_function_event},
};
use postbox_service::{configure_use_case, init_tracing};
use tokio::io::{AsyncReadExt, AsyncWriteExt};

/// Function host runner: reads one invocation event from stdin and writes the
/// `{statusCode, headers, body}` envelope to stdout. Logs go to stderr.
#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing(std::io::stderr)?;

    let settings = PostboxSettings::load()?;
    let use_case = configure_use_case(&settings)?;

    let mut input = String::new();
    tokio::io::stdin().read_to_string(&mut input).await?;
    let event: FunctionEvent = serde_json::from_str(&input)?;

    let response = handle_function_event(&use_case, event).await;

    let mut stdout = tokio::io::stdout();
    stdout.write_all(serde_json::to_string(&response)?.as_bytes()).await?;
    stdout.write_all(b"\n").await?;
    stdout.flush().await?;

    Ok(())
}
