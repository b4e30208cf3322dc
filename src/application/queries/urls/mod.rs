mod resolve;
mod service;

pub use resolve::ResolveUrlQuery;
pub use service::UrlQueryService;
