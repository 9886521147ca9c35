pub mod message_builder;
pub mod response_parser;
pub mod upstream;

pub use message_builder::MessageBuilder;
pub use response_parser::{DnsResponse, ResponseParser};
pub use upstream::ForwardingResolver;
