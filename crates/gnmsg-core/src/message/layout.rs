pub const MESSAGE_TYPE_LEN: usize = 4;
pub const PAYLOAD_LENGTH_LEN: usize = 4;
pub const NUMBER_OF_PARTS_LEN: usize = 4;
pub const TRANSACTION_ID_LEN: usize = 4;
pub const FLAGS_LEN: usize = 1;

pub const HEADER_LEN: usize =
    MESSAGE_TYPE_LEN + PAYLOAD_LENGTH_LEN + NUMBER_OF_PARTS_LEN + TRANSACTION_ID_LEN + FLAGS_LEN;

pub const FIELD_MESSAGE_TYPE: &str = "MessageType";
pub const FIELD_PAYLOAD_LENGTH: &str = "PayloadLength";
pub const FIELD_NUMBER_OF_PARTS: &str = "NumberOfParts";
pub const FIELD_TRANSACTION_ID: &str = "TransactionId";
pub const FIELD_FLAGS: &str = "Flags";
pub const FIELD_PART_TAG: &str = "PartTag";
