//! Component state for the term wizard.
//!
//! The domain state (steps, draft, records, selection, alert, export target)
//! lives in the embedded `TermWorkflow`; the fields here are the browser-side
//! extras: canvas refs for the two signature pads, overlay sheet refs, and
//! the PDF viewer state.

use common::workflow::TermWorkflow;
use yew::prelude::*;

use crate::storage::LocalRecordStore;
use crate::toast::show_toast;

pub struct TermComponent {
    /// Wizard state machine over the browser-backed record store.
    pub workflow: TermWorkflow<LocalRecordStore>,

    /// Canvas the technician signs on (step 1).
    pub issuer_pad_ref: NodeRef,

    /// Canvas the employee signs on (step 3).
    pub subject_pad_ref: NodeRef,

    /// Overlay sheet showing a signed term from the history list.
    pub viewer_sheet_ref: NodeRef,

    /// Record currently shown in the viewer sheet.
    pub viewed_id: Option<u32>,

    /// Overlay sheet holding the PDF iframe.
    pub export_sheet_ref: NodeRef,

    /// Blob URL of the last generated PDF, shown by the iframe. One slot: a
    /// new export replaces it.
    pub pdf_url: Option<String>,

    /// Whether the export dialog is waiting for the PDF (shows the spinner).
    pub pdf_loading: bool,
}

impl TermComponent {
    pub fn new() -> Self {
        let workflow = match TermWorkflow::load(LocalRecordStore) {
            Ok(workflow) => workflow,
            Err(e) => {
                gloo_console::error!("falha ao carregar termos:", e.to_string());
                show_toast("Não foi possível carregar os termos salvos.");
                TermWorkflow::empty(LocalRecordStore)
            }
        };
        Self {
            workflow,
            issuer_pad_ref: NodeRef::default(),
            subject_pad_ref: NodeRef::default(),
            viewer_sheet_ref: NodeRef::default(),
            viewed_id: None,
            export_sheet_ref: NodeRef::default(),
            pdf_url: None,
            pdf_loading: false,
        }
    }
}
