use common::model::term::DraftField;

#[derive(Clone)]
pub enum Msg {
    EditDraft(DraftField, String),
    ClearIssuerSignature,
    SubmitRegistration,
    Advance,
    Retreat,
    SelectTerm(Option<u32>),
    ClearSubjectSignature,
    SubmitSubjectSignature,
    DismissAlert,
    OpenViewer(u32),
    CloseViewer,
    ExportPdf(u32),
    PdfReady { id: u32, url: String },
    PdfFailed(String),
    PdfLoaded,
    CloseExportDialog,
    ShareByEmail,
}
