use thiserror::Error;

/// Every failure the dormitory core reports to its callers.
///
/// `Display` is meant for logs; [`DomainError::user_message`] is the
/// localized text shown to staff.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    /// Update/delete target does not exist.
    #[error("Not found: {entity} with id={id}")]
    NotFound { entity: &'static str, id: i32 },

    #[error("Missing reference: {0} is required")]
    MissingReference(&'static str),

    #[error("Building {0} does not exist")]
    BuildingNotFound(i32),

    /// Raised by the referential checks and by admission control. The id
    /// is unknown when the rejection comes back from a store trigger.
    #[error("Room {} does not exist", fmt_id(.0))]
    RoomNotFound(Option<i32>),

    #[error("Student {0} does not exist")]
    StudentNotFound(i32),

    #[error("Room {room_id} does not belong to building {building_id}")]
    RoomBuildingMismatch { room_id: i32, building_id: i32 },

    #[error("Student {student_id} is not assigned to room {room_id} in building {building_id}")]
    StudentRoomMismatch {
        student_id: i32,
        room_id: i32,
        building_id: i32,
    },

    #[error("Room {} is full", fmt_id(.0))]
    RoomFull(Option<i32>),

    #[error("Floor count must be positive")]
    InvalidFloorCount,

    #[error("Room count must not be negative")]
    InvalidRoomCount,

    #[error("Room capacity must be positive")]
    InvalidRoomCapacity,

    #[error("Room fee must not be negative")]
    InvalidRoomFee,

    #[error("Invalid gender: {0}")]
    InvalidGender(String),

    #[error("Payment amount must be positive")]
    InvalidAmount,

    #[error("Invalid payment type: {0}")]
    InvalidPaymentType(String),

    #[error("Duplicate key: {0}")]
    DuplicateKey(String),

    #[error("Validation: {0}")]
    Validation(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Store failure that matches no known domain rule. `message` is the
    /// caller-supplied default shown to users, `detail` the raw cause.
    #[error("Persistence error: {message} ({detail})")]
    Persistence { message: String, detail: String },
}

fn fmt_id(id: &Option<i32>) -> String {
    id.map_or_else(|| "?".to_string(), |id| id.to_string())
}

impl DomainError {
    pub fn not_found(entity: &'static str, id: i32) -> Self {
        Self::NotFound { entity, id }
    }

    pub fn persistence(message: impl Into<String>, detail: impl ToString) -> Self {
        Self::Persistence {
            message: message.into(),
            detail: detail.to_string(),
        }
    }

    /// Localized text for the staff UI.
    pub fn user_message(&self) -> String {
        match self {
            Self::NotFound { .. } => "记录不存在".into(),
            Self::MissingReference("building") => "所属公寓不能为空".into(),
            Self::MissingReference(_) => "公寓号和寝室号不能为空".into(),
            Self::BuildingNotFound(_) => "公寓不存在".into(),
            Self::RoomNotFound(_) => "寝室不存在".into(),
            Self::StudentNotFound(_) => "学生不存在".into(),
            Self::RoomBuildingMismatch { .. } => "寝室不属于该公寓".into(),
            Self::StudentRoomMismatch { .. } => "学生不在指定公寓寝室中".into(),
            Self::RoomFull(_) => "寝室人数已满".into(),
            Self::InvalidFloorCount => "楼层数必须大于0".into(),
            Self::InvalidRoomCount => "房间数不能为负数".into(),
            Self::InvalidRoomCapacity => "寝室容量必须大于0".into(),
            Self::InvalidRoomFee => "寝室费用不能为负数".into(),
            Self::InvalidGender(_) => "性别只能是男或女".into(),
            Self::InvalidAmount => "金额必须大于0".into(),
            Self::InvalidPaymentType(_) => "收费类型必须是住宿费、水电费或押金".into(),
            Self::DuplicateKey(_) => "编号已存在".into(),
            Self::Validation(msg) => msg.clone(),
            Self::Unauthorized(_) => "用户名或密码错误".into(),
            Self::Forbidden(_) => "权限不足".into(),
            Self::Persistence { message, .. } => message.clone(),
        }
    }
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
