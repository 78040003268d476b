pub mod env {
    pub const RESEND_API_KEY_ENV_VAR: &str = "RESEND_API_KEY";
    pub const APP_ENVIRONMENT_ENV_VAR: &str = "APP_ENVIRONMENT";
    pub const SETTINGS_ENV_PREFIX: &str = "POSTBOX";
}

pub const SEND_EMAIL_ROUTE: &str = "/api/send-email";
pub const HEALTH_CHECK_ROUTE: &str = "/health";
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

pub mod prod {
    pub const APP_ADDRESS: &str = "0.0.0.0:3000";
    pub mod email_client {
        use std::time::Duration;

        pub const BASE_URL: &str = "https://api.resend.com/";
        pub const SENDER: &str = "onboarding@resend.dev";
        pub const TIMEOUT: Duration = std::time::Duration::from_secs(10);
    }
}

pub mod test {
    pub const APP_ADDRESS: &str = "127.0.0.1:0";
    pub mod email_client {
        use std::time::Duration;

        pub const SENDER: &str = "test@email.com";
        pub const TIMEOUT: Duration = std::time::Duration::from_millis(200);
    }
}
