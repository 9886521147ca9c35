//! DNS Message Builder
//!
//! Constructs upstream query messages in wire format using `hickory-proto`.

use crate::dns::codec::{parse_name, RecordTypeMapper, WireCodec};
use cascade_dns_domain::{DnsQuery, DomainError};
use hickory_proto::op::{Message, MessageType, OpCode, Query};

/// Builds DNS query messages in wire format
pub struct MessageBuilder;

impl MessageBuilder {
    /// Build a recursive query for `query` and return its id with the bytes.
    ///
    /// The id is random so the response can be matched against it.
    pub fn build_query(query: &DnsQuery) -> Result<(u16, Vec<u8>), DomainError> {
        let name = parse_name(&query.domain)?;
        let hickory_type = RecordTypeMapper::to_hickory(query.record_type);

        let id = fastrand::u16(..);

        let mut message = Message::new();
        message
            .set_id(id)
            .set_message_type(MessageType::Query)
            .set_op_code(OpCode::Query)
            .set_recursion_desired(true)
            .add_query(Query::query(name, hickory_type));

        let bytes = WireCodec::serialize_message(&message)?;
        Ok((id, bytes))
    }
}
