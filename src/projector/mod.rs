/// Projection of extracted rows onto the destination column order.
pub mod row_projector;
