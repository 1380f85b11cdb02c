//! Application services for task record orchestration.

mod records;

pub use records::{
    CreateTaskRequest, TaskRecordError, TaskRecordResult, TaskRecordService, UpdateTaskRequest,
};
