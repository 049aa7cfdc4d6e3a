mod service;

pub use service::SweeperService;
