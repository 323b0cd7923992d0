use serde::{Deserialize, Serialize};

/// One IT asset in the inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ativo {
    pub id: u32,
    pub localidade: String,
    pub numero_serie: String,
    pub patrimonio: String,
    pub status: String,
    #[serde(default)]
    pub data: Option<String>,
    #[serde(default)]
    pub no_posto: Option<String>,
    #[serde(default)]
    pub fabricante: Option<String>,
    #[serde(default)]
    pub marca_modelo: Option<String>,
    #[serde(default)]
    pub ramal_servidor: Option<String>,
    #[serde(default)]
    pub ip: Option<String>,
    #[serde(default)]
    pub observacao: Option<String>,
    #[serde(default)]
    pub termo_assinado: bool,
}
