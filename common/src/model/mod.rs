pub mod ativo;
pub mod document;
pub mod term;
