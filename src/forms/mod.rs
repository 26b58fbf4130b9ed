//! HTTP form structs and their validated payload counterparts.

pub mod contact;
