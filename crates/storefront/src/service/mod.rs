mod catalog;
mod content;
mod feedback;
mod http;
mod review;
mod telemetry;

pub use self::catalog::CatalogClientService;
pub use self::content::ContentClientService;
pub use self::feedback::FeedbackClientService;
pub use self::http::HttpApiClient;
pub use self::review::ReviewClientService;
pub use self::telemetry::ClientTelemetry;
