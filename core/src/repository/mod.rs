pub mod file;
pub mod memory;
pub mod traits;

pub use file::FileScheduleRepository;
pub use memory::MemoryScheduleRepository;
pub use traits::{ScheduleRepository, StoredSchedule};
