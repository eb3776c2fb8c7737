//! Data transfer objects for the Web API.

mod response;

pub use response::{
    ApiInfoResponse, FileListResponse, FileMetadataResponse, FileUploadResponse,
};
