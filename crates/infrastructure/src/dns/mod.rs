pub mod cache;
pub mod codec;
pub mod forwarding;
pub mod server;
pub mod transport;

pub use cache::{CacheKey, TtlAnswerCache};
pub use codec::{DecodedRequest, WireCodec};
pub use forwarding::ForwardingResolver;
pub use server::DnsServerHandler;
