/*
[INPUT]:  Request parameters and API response bodies
[OUTPUT]: Request descriptions and the typed response envelope
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

pub mod requests;
pub mod responses;

pub use requests::*;
pub use responses::*;
