//! Block kinds that own their delimiter knowledge. Each kind answers "does
//! this line belong to me, and what is its content?" using the shared
//! [`patterns`](crate::parsing::patterns) table.

pub mod block_quote;
pub mod callout;
pub mod divider;
pub mod heading;
pub mod image;
pub mod list;

pub use block_quote::BlockQuote;
pub use callout::Callout;
pub use divider::Divider;
pub use heading::Heading;
pub use image::{Image, ImageParts};
pub use list::List;
