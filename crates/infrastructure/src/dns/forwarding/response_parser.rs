use crate::dns::codec::{extract_answers, RecordTypeMapper};
use cascade_dns_domain::{normalize_domain, Answer, DnsQuery, DomainError};
use hickory_proto::op::{Message, MessageType, ResponseCode};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct DnsResponse {
    pub rcode: ResponseCode,

    pub truncated: bool,

    /// Answers of the queried type, named after the queried domain.
    pub answers: Vec<Answer>,
}

impl DnsResponse {
    pub fn is_nxdomain(&self) -> bool {
        self.rcode == ResponseCode::NXDomain
    }

    pub fn is_server_error(&self) -> bool {
        matches!(self.rcode, ResponseCode::ServFail | ResponseCode::Refused)
    }
}

pub struct ResponseParser;

impl ResponseParser {
    /// Parses an upstream reply to `query`, sent with `expected_id`.
    ///
    /// A reply whose id or question does not match the query is rejected.
    pub fn parse(
        response_bytes: &[u8],
        expected_id: u16,
        query: &DnsQuery,
    ) -> Result<DnsResponse, DomainError> {
        let message = Message::from_vec(response_bytes).map_err(|e| {
            DomainError::UpstreamFailure(format!("failed to parse DNS response: {}", e))
        })?;

        if message.message_type() != MessageType::Response {
            return Err(DomainError::UpstreamFailure(
                "reply is not a response".to_string(),
            ));
        }
        if message.id() != expected_id {
            return Err(DomainError::UpstreamFailure(format!(
                "response id {} does not match query id {}",
                message.id(),
                expected_id
            )));
        }
        Self::check_question(&message, query)?;

        let rcode = message.response_code();
        let truncated = message.truncated();
        let answers = extract_answers(&message, &query.domain, query.record_type);

        debug!(
            rcode = ?rcode,
            answers = answers.len(),
            total_answers = message.answers().len(),
            truncated = truncated,
            "DNS response parsed"
        );

        Ok(DnsResponse {
            rcode,
            truncated,
            answers,
        })
    }

    fn check_question(message: &Message, query: &DnsQuery) -> Result<(), DomainError> {
        let matches = message.queries().first().is_some_and(|question| {
            question.query_type() == RecordTypeMapper::to_hickory(query.record_type)
                && normalize_domain(&question.name().to_ascii()) == *query.domain
        });

        if matches {
            Ok(())
        } else {
            Err(DomainError::UpstreamFailure(
                "response question does not match query".to_string(),
            ))
        }
    }
}
