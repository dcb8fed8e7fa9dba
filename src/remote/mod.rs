//! Remote ingredient store: URL layout, transports, the client and the
//! request status tracker.

pub mod client;
pub mod endpoints;
pub mod error;
pub mod memory;
pub mod status;
pub mod transport;

pub use client::{
    RemoteClient, RemoteRequest, RequestOutcome, RequestTag, ADD_FAILED_MESSAGE,
    LOAD_FAILED_MESSAGE, REMOVE_FAILED_MESSAGE,
};
pub use endpoints::Endpoints;
pub use error::{RemoteError, RemoteResult};
pub use memory::MemoryTransport;
pub use status::{HttpAction, HttpState, RequestSlot, RequestStatus};
pub use transport::{HttpRequest, HttpResponse, ReqwestTransport, Transport};
