//! Term registration and signing workflow.
//!
//! `TermWorkflow` owns the wizard step sequence, the in-progress draft, the
//! committed record list, and the selection used by the signing pass. Every
//! mutation of the record list is written through the injected [`RecordStore`]
//! before it counts as committed; a failed write rolls the list back so no
//! partial record is ever observable.
//!
//! The workflow is UI-agnostic: the frontend feeds it field edits, signature
//! payloads, and timestamps, and renders whatever [`Alert`] the last operation
//! left behind.

use thiserror::Error;

use crate::model::term::{TermDraft, TermRecord};

/// The four wizard steps, in order. Transitions are strictly linear;
/// `advance`/`retreat` clamp at the boundary steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Registration,
    Preview,
    Signing,
    Completion,
}

impl Step {
    pub const COUNT: u8 = 4;

    /// 1-based position, as shown by the step indicator.
    pub fn number(self) -> u8 {
        match self {
            Step::Registration => 1,
            Step::Preview => 2,
            Step::Signing => 3,
            Step::Completion => 4,
        }
    }

    pub fn advance(self) -> Step {
        match self {
            Step::Registration => Step::Preview,
            Step::Preview => Step::Signing,
            Step::Signing => Step::Completion,
            Step::Completion => Step::Completion,
        }
    }

    pub fn retreat(self) -> Step {
        match self {
            Step::Registration => Step::Registration,
            Step::Preview => Step::Registration,
            Step::Signing => Step::Preview,
            Step::Completion => Step::Signing,
        }
    }
}

/// Failure of the underlying record store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct StoreError(pub String);

/// User-correctable rejections raised by the validation gates.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Preencha todos os campos obrigatórios.")]
    MissingRequiredFields,
    #[error("O técnico precisa fornecer sua assinatura digital.")]
    MissingIssuerSignature,
    #[error("Selecione um termo para assinar.")]
    NoRecordSelected,
    #[error("Forneça sua assinatura digital.")]
    EmptySignature,
    #[error("O termo selecionado já foi assinado.")]
    RecordNotPending(u32),
}

/// Everything a workflow operation can fail with. Errors are terminal to the
/// triggering operation only; they never leave the workflow in a partial
/// state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkflowError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Não foi possível salvar os dados: {0}")]
    Persistence(#[from] StoreError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

/// Dismissable user-facing banner message. Each operation replaces the
/// previous alert, success and failure alike.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub message: String,
    pub severity: Severity,
}

impl Alert {
    pub fn success(message: impl Into<String>) -> Self {
        Alert {
            message: message.into(),
            severity: Severity::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Alert {
            message: message.into(),
            severity: Severity::Error,
        }
    }
}

/// Durable storage for the term records and the id counter.
///
/// `load` on a fresh store yields an empty list. `next_id` is
/// read-increment-write: once handed out, an id is spent even if the commit
/// that requested it later fails — gaps are acceptable, reuse is not.
pub trait RecordStore {
    fn load(&self) -> Result<Vec<TermRecord>, StoreError>;
    fn save(&mut self, records: &[TermRecord]) -> Result<(), StoreError>;
    fn next_id(&mut self) -> Result<u32, StoreError>;
}

/// State machine for the equipment-responsibility-term wizard.
pub struct TermWorkflow<S> {
    store: S,
    step: Step,
    draft: TermDraft,
    records: Vec<TermRecord>,
    selected_id: Option<u32>,
    alert: Option<Alert>,
    export_target: Option<u32>,
}

impl<S: RecordStore> TermWorkflow<S> {
    /// Loads the committed records from the store. A fresh store yields an
    /// empty workflow, not an error.
    pub fn load(store: S) -> Result<Self, StoreError> {
        let records = store.load()?;
        Ok(Self::with_records(store, records))
    }

    /// Starts with no records. Fallback when [`TermWorkflow::load`] fails and
    /// the caller decides to carry on without history.
    pub fn empty(store: S) -> Self {
        Self::with_records(store, Vec::new())
    }

    fn with_records(store: S, records: Vec<TermRecord>) -> Self {
        TermWorkflow {
            store,
            step: Step::Registration,
            draft: TermDraft::default(),
            records,
            selected_id: None,
            alert: None,
            export_target: None,
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn advance(&mut self) {
        self.step = self.step.advance();
    }

    pub fn retreat(&mut self) {
        self.step = self.step.retreat();
    }

    pub fn draft(&self) -> &TermDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut TermDraft {
        &mut self.draft
    }

    /// All committed records, in creation order.
    pub fn records(&self) -> &[TermRecord] {
        &self.records
    }

    /// Records still awaiting the employee signature, in creation order.
    pub fn pending_records(&self) -> impl Iterator<Item = &TermRecord> {
        self.records.iter().filter(|r| r.is_pending())
    }

    pub fn record_by_id(&self, id: u32) -> Option<&TermRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn selected_id(&self) -> Option<u32> {
        self.selected_id
    }

    pub fn select_record(&mut self, id: Option<u32>) {
        self.selected_id = id;
    }

    pub fn selected_record(&self) -> Option<&TermRecord> {
        self.selected_id.and_then(|id| self.record_by_id(id))
    }

    pub fn alert(&self) -> Option<&Alert> {
        self.alert.as_ref()
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    /// Marks `id` as the record the exporter should render next. A second
    /// request before the previous one completes silently replaces it; there
    /// is no queue and no retry.
    pub fn request_export(&mut self, id: u32) {
        self.export_target = Some(id);
    }

    pub fn export_target(&self) -> Option<u32> {
        self.export_target
    }

    /// Called when the exporter signals completion (or the viewer is closed).
    pub fn finish_export(&mut self) {
        self.export_target = None;
    }

    /// Commits the draft as a new term signed by the technician.
    ///
    /// Validation runs before any id is allocated, so a rejected submission
    /// never consumes one. On success the record is appended and persisted,
    /// the draft is cleared, and the wizard advances to the preview step.
    /// If persisting fails the append is rolled back; the allocated id stays
    /// spent.
    pub fn submit_issuer_registration(
        &mut self,
        signature: &str,
        issued_at: &str,
    ) -> Result<u32, WorkflowError> {
        let result = self.try_register(signature, issued_at);
        self.alert = Some(match &result {
            Ok(_) => Alert::success("Termo cadastrado com sucesso!"),
            Err(e) => Alert::error(e.to_string()),
        });
        result
    }

    fn try_register(&mut self, signature: &str, issued_at: &str) -> Result<u32, WorkflowError> {
        if !self.draft.required_complete() {
            return Err(ValidationError::MissingRequiredFields.into());
        }
        if signature.is_empty() {
            return Err(ValidationError::MissingIssuerSignature.into());
        }

        let id = self.store.next_id()?;
        let record = self.draft.clone().into_record(id, signature, issued_at);
        self.records.push(record);
        if let Err(e) = self.store.save(&self.records) {
            self.records.pop();
            return Err(e.into());
        }

        self.draft = TermDraft::default();
        self.step = self.step.advance();
        Ok(id)
    }

    /// Applies the employee signature to the currently selected pending term.
    ///
    /// Exactly one record changes, only its `assinatura_usuario` field, and
    /// it keeps its position in the list. Signing an already-signed record is
    /// rejected by the pending precondition.
    pub fn submit_subject_signature(&mut self, signature: &str) -> Result<u32, WorkflowError> {
        let result = self.try_sign(signature);
        self.alert = Some(match &result {
            Ok(_) => Alert::success("Termo assinado com sucesso!"),
            Err(e) => Alert::error(e.to_string()),
        });
        result
    }

    fn try_sign(&mut self, signature: &str) -> Result<u32, WorkflowError> {
        let id = self.selected_id.ok_or(ValidationError::NoRecordSelected)?;
        if signature.is_empty() {
            return Err(ValidationError::EmptySignature.into());
        }
        let idx = self
            .records
            .iter()
            .position(|r| r.id == id)
            .ok_or(ValidationError::NoRecordSelected)?;
        if !self.records[idx].is_pending() {
            return Err(ValidationError::RecordNotPending(id).into());
        }

        let mut signed = self.records[idx].clone();
        signed.assinatura_usuario = signature.to_string();
        let previous = std::mem::replace(&mut self.records[idx], signed);
        if let Err(e) = self.store.save(&self.records) {
            self.records[idx] = previous;
            return Err(e.into());
        }

        self.step = self.step.advance();
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::term::DraftField;
    use std::collections::HashMap;

    /// Key-value store double with the same layout the browser store uses,
    /// so save/load exercises the real serde round trip.
    #[derive(Default)]
    struct MemoryStore {
        kv: HashMap<String, String>,
        fail_saves: bool,
    }

    impl RecordStore for MemoryStore {
        fn load(&self) -> Result<Vec<TermRecord>, StoreError> {
            match self.kv.get("termos") {
                Some(json) => serde_json::from_str(json).map_err(|e| StoreError(e.to_string())),
                None => Ok(Vec::new()),
            }
        }

        fn save(&mut self, records: &[TermRecord]) -> Result<(), StoreError> {
            if self.fail_saves {
                return Err(StoreError("save failed".to_string()));
            }
            let json = serde_json::to_string(records).map_err(|e| StoreError(e.to_string()))?;
            self.kv.insert("termos".to_string(), json);
            Ok(())
        }

        fn next_id(&mut self) -> Result<u32, StoreError> {
            let id = self
                .kv
                .get("nextId")
                .and_then(|s| s.parse().ok())
                .unwrap_or(1);
            self.kv.insert("nextId".to_string(), (id + 1).to_string());
            Ok(id)
        }
    }

    fn filled_draft() -> TermDraft {
        TermDraft {
            nome_funcionario: "Maria Silva".to_string(),
            cargo: "Engenheira".to_string(),
            cpf: "123.456.789-00".to_string(),
            endereco_funcionario: "Rua B, 42".to_string(),
            tipo_equipamento: "Notebook".to_string(),
            marca: "Dell".to_string(),
            modelo: "Latitude 5440".to_string(),
            numero_serie: "SN-0001".to_string(),
            acessorios: String::new(),
        }
    }

    fn workflow() -> TermWorkflow<MemoryStore> {
        TermWorkflow::load(MemoryStore::default()).unwrap()
    }

    fn register(wf: &mut TermWorkflow<MemoryStore>) -> u32 {
        *wf.draft_mut() = filled_draft();
        wf.submit_issuer_registration("data:image/png;base64,abc", "2025-02-21T12:00:00Z")
            .unwrap()
    }

    #[test]
    fn steps_clamp_at_both_ends() {
        let mut wf = workflow();
        wf.retreat();
        assert_eq!(wf.step(), Step::Registration);
        wf.advance();
        wf.advance();
        wf.advance();
        assert_eq!(wf.step(), Step::Completion);
        wf.advance();
        assert_eq!(wf.step(), Step::Completion);
    }

    #[test]
    fn registration_rejects_missing_required_field() {
        let mut wf = workflow();
        let mut draft = filled_draft();
        draft.cpf = String::new();
        *wf.draft_mut() = draft;

        let err = wf
            .submit_issuer_registration("sig", "2025-02-21T12:00:00Z")
            .unwrap_err();
        assert_eq!(
            err,
            WorkflowError::Validation(ValidationError::MissingRequiredFields)
        );
        assert_eq!(wf.step(), Step::Registration);
        assert!(wf.records().is_empty());
        assert_eq!(wf.alert().unwrap().severity, Severity::Error);
    }

    #[test]
    fn registration_allows_empty_accessories() {
        let mut wf = workflow();
        let mut draft = filled_draft();
        draft.acessorios = String::new();
        *wf.draft_mut() = draft;
        assert!(wf.submit_issuer_registration("sig", "now").is_ok());
    }

    #[test]
    fn registration_rejects_blank_signature() {
        let mut wf = workflow();
        *wf.draft_mut() = filled_draft();
        let err = wf.submit_issuer_registration("", "now").unwrap_err();
        assert_eq!(
            err,
            WorkflowError::Validation(ValidationError::MissingIssuerSignature)
        );
        assert_eq!(wf.step(), Step::Registration);
        assert!(wf.records().is_empty());
    }

    #[test]
    fn registration_commits_clears_draft_and_advances() {
        let mut wf = workflow();
        let id = register(&mut wf);

        assert_eq!(id, 1);
        assert_eq!(wf.step(), Step::Preview);
        assert_eq!(wf.draft(), &TermDraft::default());
        assert_eq!(wf.alert().unwrap().severity, Severity::Success);

        let record = wf.record_by_id(1).unwrap();
        assert!(record.is_pending());
        assert_eq!(record.nome_funcionario, "Maria Silva");
        assert_eq!(record.assinatura_usuario, "");
    }

    #[test]
    fn failed_submissions_never_consume_ids() {
        let mut wf = workflow();
        assert_eq!(register(&mut wf), 1);

        // Rejected submission between two commits: validation fires before
        // allocation, so the next successful commit still gets id 2.
        assert!(wf.submit_issuer_registration("", "now").is_err());
        assert_eq!(register(&mut wf), 2);
        assert_eq!(register(&mut wf), 3);

        let ids: Vec<u32> = wf.records().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn signing_requires_a_selection() {
        let mut wf = workflow();
        register(&mut wf);
        let err = wf.submit_subject_signature("sig").unwrap_err();
        assert_eq!(
            err,
            WorkflowError::Validation(ValidationError::NoRecordSelected)
        );
    }

    #[test]
    fn signing_rejects_empty_signature() {
        let mut wf = workflow();
        let id = register(&mut wf);
        wf.select_record(Some(id));
        let step_before = wf.step();

        let err = wf.submit_subject_signature("").unwrap_err();
        assert_eq!(err, WorkflowError::Validation(ValidationError::EmptySignature));
        assert_eq!(wf.step(), step_before);
        assert!(wf.record_by_id(id).unwrap().is_pending());
    }

    #[test]
    fn signing_sets_signature_exactly_once() {
        let mut wf = workflow();
        let id = register(&mut wf);
        wf.select_record(Some(id));

        wf.submit_subject_signature("data:image/png;base64,user").unwrap();
        let record = wf.record_by_id(id).unwrap();
        assert_eq!(record.assinatura_usuario, "data:image/png;base64,user");
        assert_eq!(wf.pending_records().count(), 0);

        // A second pass over the same record is rejected by the pending gate.
        let err = wf.submit_subject_signature("other").unwrap_err();
        assert_eq!(
            err,
            WorkflowError::Validation(ValidationError::RecordNotPending(id))
        );
        assert_eq!(
            wf.record_by_id(id).unwrap().assinatura_usuario,
            "data:image/png;base64,user"
        );
    }

    #[test]
    fn signing_touches_only_the_selected_record() {
        let mut wf = workflow();
        let first = register(&mut wf);
        let second = register(&mut wf);

        wf.select_record(Some(first));
        wf.submit_subject_signature("sig-1").unwrap();

        assert!(!wf.record_by_id(first).unwrap().is_pending());
        assert!(wf.record_by_id(second).unwrap().is_pending());
        // Position preserved: the signed record is still first in the list.
        assert_eq!(wf.records()[0].id, first);
        assert_eq!(wf.records()[1].id, second);
    }

    #[test]
    fn pending_filter_preserves_creation_order() {
        let mut wf = workflow();
        let a = register(&mut wf);
        let b = register(&mut wf);
        let c = register(&mut wf);

        wf.select_record(Some(b));
        wf.submit_subject_signature("sig").unwrap();

        let pending: Vec<u32> = wf.pending_records().map(|r| r.id).collect();
        assert_eq!(pending, vec![a, c]);
    }

    #[test]
    fn records_survive_a_store_round_trip() {
        let mut wf = workflow();
        let id = register(&mut wf);
        wf.select_record(Some(id));
        wf.submit_subject_signature("data:image/png;base64,user").unwrap();
        register(&mut wf);
        let saved = wf.records().to_vec();

        let reloaded = TermWorkflow::load(wf.store).unwrap();
        assert_eq!(reloaded.records(), saved.as_slice());
    }

    #[test]
    fn failed_save_rolls_back_the_commit() {
        let mut wf = workflow();
        wf.store.fail_saves = true;
        *wf.draft_mut() = filled_draft();

        let err = wf.submit_issuer_registration("sig", "now").unwrap_err();
        assert!(matches!(err, WorkflowError::Persistence(_)));
        assert!(wf.records().is_empty());
        assert_eq!(wf.step(), Step::Registration);
        // The draft is kept so the user can retry without retyping.
        assert_eq!(wf.draft(), &filled_draft());

        // The id handed to the failed commit stays spent.
        wf.store.fail_saves = false;
        assert_eq!(register(&mut wf), 2);
    }

    #[test]
    fn failed_save_rolls_back_the_signature() {
        let mut wf = workflow();
        let id = register(&mut wf);
        wf.select_record(Some(id));

        wf.store.fail_saves = true;
        let err = wf.submit_subject_signature("sig").unwrap_err();
        assert!(matches!(err, WorkflowError::Persistence(_)));
        assert!(wf.record_by_id(id).unwrap().is_pending());
    }

    #[test]
    fn export_slot_is_replaced_not_queued() {
        let mut wf = workflow();
        let first = register(&mut wf);
        let second = register(&mut wf);

        wf.request_export(first);
        wf.request_export(second);
        assert_eq!(wf.export_target(), Some(second));

        wf.finish_export();
        assert_eq!(wf.export_target(), None);
    }

    #[test]
    fn draft_field_edits_land_in_the_right_slot() {
        let mut draft = TermDraft::default();
        for field in DraftField::ALL {
            draft.set(field, field.label().to_string());
        }
        assert_eq!(draft.cpf, "CPF");
        assert_eq!(draft.marca, "Marca");
        assert!(draft.required_complete());
    }

    // The end-to-end scenario: empty store, one registration, one rejected
    // and one accepted signing pass.
    #[test]
    fn first_term_lifecycle() {
        let mut wf = workflow();
        *wf.draft_mut() = filled_draft();
        let id = wf
            .submit_issuer_registration("data:image/png;base64,tec", "2025-02-21T12:00:00Z")
            .unwrap();
        assert_eq!(id, 1);
        assert_eq!(wf.step(), Step::Preview);

        wf.advance();
        wf.select_record(Some(1));
        assert!(wf.submit_subject_signature("").is_err());
        assert_eq!(wf.alert().unwrap().severity, Severity::Error);
        assert_eq!(wf.step(), Step::Signing);

        wf.submit_subject_signature("data:image/png;base64,user").unwrap();
        assert_eq!(wf.step(), Step::Completion);
        assert_eq!(wf.pending_records().count(), 0);
    }
}
