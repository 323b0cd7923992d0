use serde::{Deserialize, Serialize};

/// One equipment-responsibility term: the employee's data, the assigned
/// equipment, and both signatures.
///
/// A record is created by the technician with `assinatura_usuario` empty; the
/// employee's signing pass fills it exactly once. Signatures are stored as
/// base64 PNG data URLs, `data` as an ISO-8601 timestamp. The field names are
/// also the persisted JSON layout, so renames here are breaking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermRecord {
    /// Unique, monotonically assigned at creation, never reused or mutated.
    pub id: u32,
    pub nome_funcionario: String,
    pub cargo: String,
    pub cpf: String,
    pub endereco_funcionario: String,
    pub tipo_equipamento: String,
    pub marca: String,
    pub modelo: String,
    pub numero_serie: String,
    pub acessorios: String,
    /// Technician signature, set once at creation.
    pub assinatura_tecnico: String,
    /// Employee signature; empty string until the record is signed.
    pub assinatura_usuario: String,
    /// Creation timestamp (ISO-8601).
    pub data: String,
}

impl TermRecord {
    /// A record is pending while the employee has not signed it yet.
    pub fn is_pending(&self) -> bool {
        self.assinatura_usuario.is_empty()
    }
}

/// The text fields the technician fills before a term is committed.
///
/// `TermDraft` identifies each field so forms can be rendered and updated
/// generically instead of one handler per input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    NomeFuncionario,
    Cargo,
    Cpf,
    EnderecoFuncionario,
    TipoEquipamento,
    Marca,
    Modelo,
    NumeroSerie,
    Acessorios,
}

impl DraftField {
    pub const ALL: [DraftField; 9] = [
        DraftField::NomeFuncionario,
        DraftField::Cargo,
        DraftField::Cpf,
        DraftField::EnderecoFuncionario,
        DraftField::TipoEquipamento,
        DraftField::Marca,
        DraftField::Modelo,
        DraftField::NumeroSerie,
        DraftField::Acessorios,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DraftField::NomeFuncionario => "Nome do Funcionário",
            DraftField::Cargo => "Cargo",
            DraftField::Cpf => "CPF",
            DraftField::EnderecoFuncionario => "Endereço",
            DraftField::TipoEquipamento => "Tipo de Equipamento",
            DraftField::Marca => "Marca",
            DraftField::Modelo => "Modelo",
            DraftField::NumeroSerie => "Número de Série",
            DraftField::Acessorios => "Acessórios",
        }
    }

    pub fn hint(self) -> &'static str {
        match self {
            DraftField::NomeFuncionario => "Informe o nome completo do funcionário",
            DraftField::Cargo => "Informe o cargo do funcionário",
            DraftField::Cpf => "Informe o CPF do funcionário",
            DraftField::EnderecoFuncionario => "Informe o endereço do funcionário",
            DraftField::TipoEquipamento => "Ex.: Notebook, Desktop",
            DraftField::Marca => "Informe a marca do equipamento",
            DraftField::Modelo => "Informe o modelo do equipamento",
            DraftField::NumeroSerie => "Informe o número de série",
            DraftField::Acessorios => "Liste os acessórios, se houver",
        }
    }

    /// Every field is required except the accessories list.
    pub fn required(self) -> bool {
        !matches!(self, DraftField::Acessorios)
    }
}

/// In-progress form data, held only in memory and discarded on commit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TermDraft {
    pub nome_funcionario: String,
    pub cargo: String,
    pub cpf: String,
    pub endereco_funcionario: String,
    pub tipo_equipamento: String,
    pub marca: String,
    pub modelo: String,
    pub numero_serie: String,
    pub acessorios: String,
}

impl TermDraft {
    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::NomeFuncionario => &self.nome_funcionario,
            DraftField::Cargo => &self.cargo,
            DraftField::Cpf => &self.cpf,
            DraftField::EnderecoFuncionario => &self.endereco_funcionario,
            DraftField::TipoEquipamento => &self.tipo_equipamento,
            DraftField::Marca => &self.marca,
            DraftField::Modelo => &self.modelo,
            DraftField::NumeroSerie => &self.numero_serie,
            DraftField::Acessorios => &self.acessorios,
        }
    }

    pub fn set(&mut self, field: DraftField, value: String) {
        let slot = match field {
            DraftField::NomeFuncionario => &mut self.nome_funcionario,
            DraftField::Cargo => &mut self.cargo,
            DraftField::Cpf => &mut self.cpf,
            DraftField::EnderecoFuncionario => &mut self.endereco_funcionario,
            DraftField::TipoEquipamento => &mut self.tipo_equipamento,
            DraftField::Marca => &mut self.marca,
            DraftField::Modelo => &mut self.modelo,
            DraftField::NumeroSerie => &mut self.numero_serie,
            DraftField::Acessorios => &mut self.acessorios,
        };
        *slot = value;
    }

    /// True when all required fields are non-empty.
    pub fn required_complete(&self) -> bool {
        DraftField::ALL
            .iter()
            .all(|&f| !f.required() || !self.get(f).trim().is_empty())
    }

    /// Consumes the draft into a committed record. The employee signature
    /// starts empty; the signing pass fills it later.
    pub fn into_record(self, id: u32, assinatura_tecnico: &str, data: &str) -> TermRecord {
        TermRecord {
            id,
            nome_funcionario: self.nome_funcionario,
            cargo: self.cargo,
            cpf: self.cpf,
            endereco_funcionario: self.endereco_funcionario,
            tipo_equipamento: self.tipo_equipamento,
            marca: self.marca,
            modelo: self.modelo,
            numero_serie: self.numero_serie,
            acessorios: self.acessorios,
            assinatura_tecnico: assinatura_tecnico.to_string(),
            assinatura_usuario: String::new(),
            data: data.to_string(),
        }
    }
}
