//! Fixed text of the equipment-responsibility term.
//!
//! Shared by the frontend preview and the backend PDF renderer so the two
//! never drift apart. Only the employee/equipment fields and the signatures
//! vary per record.

pub const EMPREGADOR: &str = "Projeta Engenharia";
pub const ENDERECO_EMPREGADOR: &str = "RUA A - VILA VICENTE FIALHO, CASA 01";
pub const CNPJ_EMPREGADOR: &str = "CNPJ: 04.892.580/0001-20";

pub const SECAO_PARTES: &str = "IDENTIFICAÇÃO DAS PARTES";
pub const SECAO_OBJETO: &str = "OBJETO DO TERMO";
pub const SECAO_EQUIPAMENTO: &str = "EQUIPAMENTO CEDIDO";
pub const SECAO_RESPONSABILIDADES: &str = "RESPONSABILIDADES DO FUNCIONÁRIO";
pub const SECAO_PENALIDADES: &str = "PENALIDADES";
pub const SECAO_DISPOSICOES: &str = "DISPOSIÇÕES FINAIS";
pub const SECAO_DECLARACAO: &str = "DECLARAÇÃO DE RECEBIMENTO";

pub const OBJETO: &str = "Este Termo de Responsabilidade formaliza o compromisso do FUNCIONÁRIO \
quanto ao uso, guarda e conservação do equipamento cedido pelo EMPREGADOR.";

pub const RESPONSABILIDADES: [&str; 7] = [
    "Zelar pelo uso e conservação do equipamento.",
    "Utilizar o equipamento exclusivamente para fins profissionais.",
    "Não instalar softwares não autorizados.",
    "Informar problemas ou danos imediatamente.",
    "Devolver o equipamento em perfeito estado, salvo desgaste natural.",
    "Permitir manutenções preventivas autorizadas.",
    "Manter a confidencialidade das informações.",
];

pub const PENALIDADES: &str = "O descumprimento das responsabilidades implicará no ressarcimento \
dos custos de reparo ou substituição do equipamento.";

pub const DISPOSICOES_FINAIS: &str = "Este Termo entra em vigor na data de sua assinatura e \
vigorará enquanto o equipamento estiver em posse do FUNCIONÁRIO.";

pub const DECLARACAO: &str = "Declaro ter recebido o equipamento descrito e concordo com os \
termos estabelecidos.";

pub const RODAPE: &str = "Termo Assinado - Projeta Engenharia";

/// Placeholder shown for fields the technician has not filled yet.
pub const CAMPO_VAZIO: &str = "_______________";
