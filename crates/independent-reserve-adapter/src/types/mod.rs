/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed request values and ordered wire payloads
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

pub mod enums;
pub mod payload;
pub mod requests;

pub use enums::*;
pub use payload::*;
pub use requests::*;
