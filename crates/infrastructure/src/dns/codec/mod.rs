//! DNS wire codec.
//!
//! Decodes client queries into a domain and type name, and builds the
//! matching responses from resolved answers.

mod rdata;
mod record_type_map;

pub use rdata::{answer_data, parse_name, to_rdata, DEFAULT_MX_PREFERENCE};
pub use record_type_map::RecordTypeMapper;

use cascade_dns_domain::{normalize_domain, Answer, DnsQuery, DomainError, RecordType};
use hickory_proto::op::{Message, MessageType, OpCode, Query, ResponseCode};
use hickory_proto::rr::Record;
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};

/// A client query that passed wire-level parsing.
#[derive(Debug, Clone)]
pub struct DecodedRequest {
    pub message: Message,
    pub domain: String,
    /// Mnemonic of the question type, e.g. `"A"` or `"SRV"`.
    pub record_type: String,
}

impl DecodedRequest {
    pub fn id(&self) -> u16 {
        self.message.id()
    }
}

pub struct WireCodec;

impl WireCodec {
    /// Parses a query message. Responses, non-QUERY opcodes and messages
    /// without a question are rejected as malformed.
    pub fn decode(bytes: &[u8]) -> Result<DecodedRequest, DomainError> {
        let message = Message::from_vec(bytes)
            .map_err(|e| DomainError::MalformedMessage(format!("unparseable message: {}", e)))?;

        if message.message_type() != MessageType::Query {
            return Err(DomainError::MalformedMessage(
                "message is not a query".to_string(),
            ));
        }
        if message.op_code() != OpCode::Query {
            return Err(DomainError::MalformedMessage(format!(
                "unsupported opcode {:?}",
                message.op_code()
            )));
        }

        let question = message
            .queries()
            .first()
            .ok_or_else(|| DomainError::MalformedMessage("no question".to_string()))?;

        let domain = normalize_domain(&question.name().to_ascii());
        let record_type = question.query_type().to_string();

        Ok(DecodedRequest {
            message,
            domain,
            record_type,
        })
    }

    /// Builds a NOERROR response carrying `answers`.
    pub fn encode(request: &DecodedRequest, answers: &[Answer]) -> Result<Vec<u8>, DomainError> {
        Self::encode_with_code(request, answers, ResponseCode::NoError)
    }

    pub fn encode_with_code(
        request: &DecodedRequest,
        answers: &[Answer],
        code: ResponseCode,
    ) -> Result<Vec<u8>, DomainError> {
        let mut response = Self::response_for(&request.message, code);
        for answer in answers {
            response.add_answer(Self::answer_record(answer)?);
        }
        Self::serialize_message(&response)
    }

    /// Builds an answerless response with the given code.
    pub fn encode_error(
        request: &DecodedRequest,
        code: ResponseCode,
    ) -> Result<Vec<u8>, DomainError> {
        Self::serialize_message(&Self::response_for(&request.message, code))
    }

    /// Builds the query a DoH JSON request stands for, so its resolution can
    /// be answered in wire format. The id is always zero.
    pub fn synthesize_query(query: &DnsQuery) -> Result<DecodedRequest, DomainError> {
        let name = parse_name(&query.domain)?;
        let mut message = Message::new();
        message
            .set_id(0)
            .set_message_type(MessageType::Query)
            .set_op_code(OpCode::Query)
            .set_recursion_desired(true)
            .add_query(Query::query(
                name,
                RecordTypeMapper::to_hickory(query.record_type),
            ));

        Ok(DecodedRequest {
            message,
            domain: query.domain.to_string(),
            record_type: query.record_type.to_string(),
        })
    }

    fn response_for(request: &Message, code: ResponseCode) -> Message {
        let mut response = Message::new();
        response
            .set_id(request.id())
            .set_message_type(MessageType::Response)
            .set_op_code(request.op_code())
            .set_recursion_desired(request.recursion_desired())
            .set_recursion_available(true)
            .set_response_code(code);
        response.add_queries(request.queries().iter().cloned());
        response
    }

    fn answer_record(answer: &Answer) -> Result<Record, DomainError> {
        let record_type = answer
            .kind()
            .ok_or_else(|| DomainError::UnsupportedRecordType(answer.record_type.to_string()))?;
        let name = parse_name(&answer.name)?;
        let rdata = to_rdata(record_type, &answer.data)?;
        Ok(Record::from_rdata(name, answer.ttl_or_default(), rdata))
    }

    pub(crate) fn serialize_message(message: &Message) -> Result<Vec<u8>, DomainError> {
        let mut buf = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut buf);

        message.emit(&mut encoder).map_err(|e| {
            DomainError::MalformedMessage(format!("failed to serialize DNS message: {}", e))
        })?;

        Ok(buf)
    }
}

/// Extracts the answers of `record_type` from an upstream message, renamed to
/// the queried domain.
pub fn extract_answers(message: &Message, domain: &str, record_type: RecordType) -> Vec<Answer> {
    let wanted = RecordTypeMapper::to_hickory(record_type);
    message
        .answers()
        .iter()
        .filter(|record| record.record_type() == wanted)
        .filter_map(|record| {
            answer_data(record.data())
                .map(|data| Answer::new(domain, record_type, record.ttl(), data))
        })
        .collect()
}
