pub mod error;
pub mod vm;

pub use error::{RecordError, Result};
pub use vm::models::{Creator, VmInfo, VmInfoWithSrc, VmStatus};
pub use vm::{parse_vm_info, parse_vm_info_with_src, parse_vm_inventory, to_json};
