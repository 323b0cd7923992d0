pub mod ativos;
pub mod terms;
