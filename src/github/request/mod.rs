mod create_release_request;

pub use create_release_request::CreateReleaseRequest;
