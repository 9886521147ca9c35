use cascade_dns_domain::RecordType;
use hickory_proto::rr::RecordType as HickoryRecordType;

/// Conversions between the served record types and hickory's.
pub struct RecordTypeMapper;

impl RecordTypeMapper {
    pub fn to_hickory(record_type: RecordType) -> HickoryRecordType {
        match record_type {
            RecordType::A => HickoryRecordType::A,
            RecordType::AAAA => HickoryRecordType::AAAA,
            RecordType::CNAME => HickoryRecordType::CNAME,
            RecordType::MX => HickoryRecordType::MX,
            RecordType::TXT => HickoryRecordType::TXT,
            RecordType::PTR => HickoryRecordType::PTR,
            RecordType::NS => HickoryRecordType::NS,
        }
    }

    pub fn from_hickory(record_type: HickoryRecordType) -> Option<RecordType> {
        RecordType::from_u16(u16::from(record_type))
    }
}
