//! Update function for the term wizard, Elm style: takes the component
//! state, the context, and a message, mutates, and reports whether to
//! re-render.
//!
//! Domain decisions (validation, id allocation, persistence, step
//! transitions) are delegated to `TermWorkflow`; this function only moves
//! signature payloads, overlay sheets, and the PDF request across the
//! browser boundary.

use common::model::term::TermRecord;
use gloo_net::http::Request;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::components::signature;
use crate::overlay::sheet::{close_sheet, open_sheet};
use crate::toast::show_toast;

use super::helpers;
use super::messages::Msg;
use super::state::TermComponent;

pub fn update(component: &mut TermComponent, ctx: &Context<TermComponent>, msg: Msg) -> bool {
    match msg {
        Msg::EditDraft(field, value) => {
            component.workflow.draft_mut().set(field, value);
            true
        }
        Msg::ClearIssuerSignature => {
            signature::clear(&component.issuer_pad_ref);
            false
        }
        Msg::SubmitRegistration => {
            // A blank pad captures as None and becomes the empty payload the
            // workflow's signature gate rejects.
            let payload = signature::capture_trimmed(&component.issuer_pad_ref).unwrap_or_default();
            let issued_at = helpers::now_iso();
            if component
                .workflow
                .submit_issuer_registration(&payload, &issued_at)
                .is_ok()
            {
                signature::clear(&component.issuer_pad_ref);
            }
            true
        }
        Msg::Advance => {
            component.workflow.advance();
            true
        }
        Msg::Retreat => {
            component.workflow.retreat();
            true
        }
        Msg::SelectTerm(id) => {
            component.workflow.select_record(id);
            true
        }
        Msg::ClearSubjectSignature => {
            signature::clear(&component.subject_pad_ref);
            false
        }
        Msg::SubmitSubjectSignature => {
            let payload = signature::capture_trimmed(&component.subject_pad_ref).unwrap_or_default();
            if component.workflow.submit_subject_signature(&payload).is_ok() {
                signature::clear(&component.subject_pad_ref);
            }
            true
        }
        Msg::DismissAlert => {
            component.workflow.dismiss_alert();
            true
        }
        Msg::OpenViewer(id) => {
            component.viewed_id = Some(id);
            open_sheet(component.viewer_sheet_ref.clone());
            true
        }
        Msg::CloseViewer => {
            component.viewed_id = None;
            close_sheet(component.viewer_sheet_ref.clone());
            true
        }
        Msg::ExportPdf(id) => {
            let Some(record) = component.workflow.record_by_id(id).cloned() else {
                return false;
            };
            // Single export slot: a new request replaces whatever was there.
            component.workflow.request_export(id);
            if let Some(old) = component.pdf_url.take() {
                helpers::revoke_object_url(&old);
            }
            component.pdf_loading = true;
            open_sheet(component.export_sheet_ref.clone());

            let link = ctx.link().clone();
            spawn_local(async move {
                match fetch_pdf(&record).await {
                    Ok(url) => link.send_message(Msg::PdfReady { id, url }),
                    Err(e) => link.send_message(Msg::PdfFailed(e)),
                }
            });
            true
        }
        Msg::PdfReady { id, url } => {
            // A newer export may have replaced this one while it was in
            // flight; stale results are dropped, not queued.
            if component.workflow.export_target() != Some(id) {
                helpers::revoke_object_url(&url);
                return false;
            }
            component.pdf_url = Some(url);
            true
        }
        Msg::PdfFailed(err) => {
            gloo_console::error!("falha ao gerar PDF:", err);
            show_toast("Não foi possível gerar o PDF. Tente novamente.");
            component.pdf_loading = false;
            component.workflow.finish_export();
            close_sheet(component.export_sheet_ref.clone());
            true
        }
        Msg::PdfLoaded => {
            component.pdf_loading = false;
            component.workflow.finish_export();
            true
        }
        Msg::CloseExportDialog => {
            if let Some(url) = component.pdf_url.take() {
                helpers::revoke_object_url(&url);
            }
            component.pdf_loading = false;
            component.workflow.finish_export();
            close_sheet(component.export_sheet_ref.clone());
            true
        }
        Msg::ShareByEmail => {
            helpers::share_via_email();
            false
        }
    }
}

/// Posts the record to the renderer and wraps the returned PDF bytes in a
/// blob URL for the dialog's iframe.
async fn fetch_pdf(record: &TermRecord) -> Result<String, String> {
    let response = Request::post("/api/terms/pdf")
        .json(record)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if response.status() != 200 {
        return Err(response.text().await.unwrap_or_default());
    }
    let bytes = response.binary().await.map_err(|e| e.to_string())?;
    helpers::bytes_to_object_url(&bytes, "application/pdf")
}
