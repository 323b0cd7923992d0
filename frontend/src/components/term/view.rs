//! View rendering for the term wizard: step indicator, the four step cards,
//! the history list, and the viewer/export overlay sheets.
//!
//! The formatted document (`term_document`) is the on-screen twin of the PDF
//! the backend renders; both read their fixed text from
//! `common::model::document`.

use common::model::document as doc;
use common::model::term::{DraftField, TermRecord};
use common::workflow::{Severity, Step};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::html::Scope;
use yew::prelude::*;

use crate::components::signature::SignaturePad;
use crate::overlay::sheet::OverlaySheet;

use super::helpers;
use super::messages::Msg;
use super::state::TermComponent;

pub fn view(component: &TermComponent, ctx: &Context<TermComponent>) -> Html {
    let link = ctx.link();
    html! {
        <div class="term-page">
            { alert_banner(component, link) }
            { step_indicator(component.workflow.step()) }
            {
                match component.workflow.step() {
                    Step::Registration => registration_step(component, link),
                    Step::Preview => preview_step(component, link),
                    Step::Signing => signing_step(component, link),
                    Step::Completion => completion_step(component, link),
                }
            }
            { history_card(component, link) }
            { viewer_dialog(component, link) }
            { export_dialog(component, link) }
        </div>
    }
}

fn alert_banner(component: &TermComponent, link: &Scope<TermComponent>) -> Html {
    match component.workflow.alert() {
        Some(alert) => {
            let class = match alert.severity {
                Severity::Error => "alert error",
                Severity::Success => "alert success",
            };
            html! {
                <div class={class} onclick={link.callback(|_| Msg::DismissAlert)}>
                    { alert.message.clone() }
                </div>
            }
        }
        None => html! {},
    }
}

fn step_indicator(current: Step) -> Html {
    html! {
        <div class="step-indicator">
            {
                (1..=Step::COUNT).map(|n| {
                    let class = if n == current.number() { "step-dot active" } else { "step-dot" };
                    html! { <div class={class}>{ n }</div> }
                }).collect::<Html>()
            }
        </div>
    }
}

/// Step 1: the technician fills the employee/equipment form and signs.
fn registration_step(component: &TermComponent, link: &Scope<TermComponent>) -> Html {
    let draft = component.workflow.draft();
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::SubmitRegistration
    });

    let fields = DraftField::ALL
        .iter()
        .map(|&field| {
            let wide = field == DraftField::Acessorios;
            html! {
                <div class={if wide { "form-field wide" } else { "form-field" }} title={field.hint()}>
                    <label>{ field.label() }</label>
                    <input
                        value={draft.get(field).to_string()}
                        oninput={link.callback(move |e: InputEvent| {
                            Msg::EditDraft(field, e.target_unchecked_into::<HtmlInputElement>().value())
                        })}
                    />
                </div>
            }
        })
        .collect::<Html>();

    html! {
        <div class="card step-card">
            <div class="card-header"><h2>{ "Cadastro do Termo (Técnico)" }</h2></div>
            <div class="card-body">
                <form {onsubmit}>
                    <div class="form-grid">{ fields }</div>
                    <div class="signature-block">
                        <label>{ "Assinatura Digital do Técnico (Representante da Empresa)" }</label>
                        <div class="signature-frame">
                            <SignaturePad canvas_ref={component.issuer_pad_ref.clone()} />
                        </div>
                        <button type="button" class="btn" onclick={link.callback(|_| Msg::ClearIssuerSignature)}>
                            { "Limpar Assinatura" }
                        </button>
                    </div>
                    <div class="step-nav right">
                        <button type="submit" class="btn primary">{ "Avançar" }</button>
                    </div>
                </form>
            </div>
        </div>
    }
}

/// Step 2: read-only preview of the draft before it is signed away.
fn preview_step(component: &TermComponent, link: &Scope<TermComponent>) -> Html {
    let preview = component
        .workflow
        .draft()
        .clone()
        .into_record(0, "", &helpers::now_iso());
    html! {
        <div class="card step-card">
            <div class="card-header"><h2>{ "Prévia do Termo" }</h2></div>
            <div class="card-body">
                <p class="muted">{ "Revise os dados preenchidos:" }</p>
                { term_document(&preview) }
            </div>
            <div class="step-nav">
                <button class="btn" onclick={link.callback(|_| Msg::Retreat)}>{ "Voltar" }</button>
                <button class="btn primary" onclick={link.callback(|_| Msg::Advance)}>{ "Avançar" }</button>
            </div>
        </div>
    }
}

/// Step 3: the employee picks a pending term and signs it.
fn signing_step(component: &TermComponent, link: &Scope<TermComponent>) -> Html {
    let pending: Vec<&TermRecord> = component.workflow.pending_records().collect();
    let selected = component.workflow.selected_record();

    let body = if pending.is_empty() {
        html! { <p class="muted">{ "Nenhum termo pendente para assinatura." }</p> }
    } else {
        html! {
            <>
                <div class="form-field">
                    <label for="select-termo">{ "Selecione o Termo a Assinar" }</label>
                    <select
                        id="select-termo"
                        onchange={link.callback(|e: Event| {
                            let value = e.target_unchecked_into::<HtmlSelectElement>().value();
                            Msg::SelectTerm(value.parse().ok())
                        })}
                    >
                        <option value="" selected={component.workflow.selected_id().is_none()}>
                            { "-- Selecione --" }
                        </option>
                        {
                            pending.iter().map(|termo| html! {
                                <option
                                    value={termo.id.to_string()}
                                    selected={component.workflow.selected_id() == Some(termo.id)}
                                >
                                    { format!("[{}] {} - {}", termo.id, termo.nome_funcionario, termo.tipo_equipamento) }
                                </option>
                            }).collect::<Html>()
                        }
                    </select>
                </div>
                {
                    match selected {
                        Some(termo) => term_document(termo),
                        None => html! {},
                    }
                }
                <div class="signature-block">
                    <label>{ "Assinatura Digital do Funcionário" }</label>
                    <div class="signature-frame">
                        <SignaturePad canvas_ref={component.subject_pad_ref.clone()} />
                    </div>
                    <button type="button" class="btn" onclick={link.callback(|_| Msg::ClearSubjectSignature)}>
                        { "Limpar Assinatura" }
                    </button>
                </div>
            </>
        }
    };

    html! {
        <div class="card step-card">
            <div class="card-header"><h2>{ "Assinatura do Termo (Funcionário)" }</h2></div>
            <div class="card-body">{ body }</div>
            <div class="step-nav">
                <button class="btn" onclick={link.callback(|_| Msg::Retreat)}>{ "Voltar" }</button>
                <button class="btn primary" onclick={link.callback(|_| Msg::SubmitSubjectSignature)}>
                    { "Assinar Termo" }
                </button>
            </div>
        </div>
    }
}

/// Step 4: confirmation plus export and share actions.
fn completion_step(component: &TermComponent, link: &Scope<TermComponent>) -> Html {
    let selected = component.workflow.selected_record();
    html! {
        <div class="card step-card">
            <div class="card-header"><h2>{ "Termo Finalizado" }</h2></div>
            <div class="card-body">
                <p class="muted">{ "O termo foi assinado com sucesso!" }</p>
                {
                    match selected {
                        Some(termo) => term_document(termo),
                        None => html! { <p class="muted">{ "Nenhum termo selecionado para visualização." }</p> },
                    }
                }
            </div>
            <div class="step-nav">
                <button class="btn" onclick={link.callback(|_| Msg::Retreat)}>{ "Voltar" }</button>
                <div class="step-actions">
                    {
                        match selected {
                            Some(termo) => {
                                let id = termo.id;
                                html! {
                                    <button class="btn primary" onclick={link.callback(move |_| Msg::ExportPdf(id))}>
                                        { "Exportar para PDF" }
                                    </button>
                                }
                            }
                            None => html! {},
                        }
                    }
                    <button class="btn primary" onclick={link.callback(|_| Msg::ShareByEmail)}>
                        { "Compartilhar por Email" }
                    </button>
                </div>
            </div>
        </div>
    }
}

fn history_card(component: &TermComponent, link: &Scope<TermComponent>) -> Html {
    let records = component.workflow.records();
    let body = if records.is_empty() {
        html! { <p class="muted">{ "Nenhum termo cadastrado." }</p> }
    } else {
        html! {
            <ul class="history-list">
                {
                    records.iter().map(|termo| {
                        let id = termo.id;
                        html! {
                            <li class="history-item">
                                <div class="history-summary" onclick={link.callback(move |_| Msg::OpenViewer(id))}>
                                    <strong>{ termo.nome_funcionario.clone() }</strong>
                                    { format!(" - {}", helpers::format_date_time(&termo.data)) }
                                    <p class="muted">
                                        { format!("Equipamento: {} - {} {}", termo.tipo_equipamento, termo.marca, termo.modelo) }
                                    </p>
                                </div>
                                <button class="btn primary" onclick={link.callback(move |_| Msg::ExportPdf(id))}>
                                    { "Exportar PDF" }
                                </button>
                            </li>
                        }
                    }).collect::<Html>()
                }
            </ul>
        }
    };

    html! {
        <div class="card">
            <div class="card-header"><h2>{ "Histórico de Termos" }</h2></div>
            <div class="card-body">{ body }</div>
        </div>
    }
}

/// Overlay sheet showing a term from the history list.
fn viewer_dialog(component: &TermComponent, link: &Scope<TermComponent>) -> Html {
    let viewed = component
        .viewed_id
        .and_then(|id| component.workflow.record_by_id(id));
    html! {
        <OverlaySheet node_ref={component.viewer_sheet_ref.clone()}>
            <div class="sheet-backdrop">
                <div class="sheet-panel wide">
                    <div class="sheet-header">
                        <h2>{ "Termo Assinado" }</h2>
                        <button class="btn primary" onclick={link.callback(|_| Msg::CloseViewer)}>
                            { "Fechar" }
                        </button>
                    </div>
                    {
                        match viewed {
                            Some(termo) => term_document(termo),
                            None => html! { <p class="muted">{ "Nenhum termo selecionado." }</p> },
                        }
                    }
                </div>
            </div>
        </OverlaySheet>
    }
}

/// Overlay sheet with the generated PDF. The iframe stays hidden (under a
/// white overlay) until it reports `onload`, so a previous PDF never flashes.
fn export_dialog(component: &TermComponent, link: &Scope<TermComponent>) -> Html {
    let on_close = link.callback(|_| Msg::CloseExportDialog);
    let on_iframe_load = link.callback(|_: Event| Msg::PdfLoaded);

    html! {
        <OverlaySheet node_ref={component.export_sheet_ref.clone()}>
            <div class="sheet-backdrop dark">
                <button class="sheet-close" onclick={on_close}>{ "✕" }</button>
                <div class="pdf-frame">
                    {
                        if let Some(url) = &component.pdf_url {
                            let style = if component.pdf_loading {
                                "visibility:hidden;"
                            } else {
                                "visibility:visible;"
                            };
                            html! { <iframe src={url.clone()} style={style} onload={on_iframe_load} /> }
                        } else if !component.pdf_loading {
                            html! { <div class="pdf-placeholder">{ "Nenhum PDF disponível" }</div> }
                        } else {
                            html! {}
                        }
                    }
                    {
                        if component.pdf_loading {
                            html! {
                                <div class="pdf-overlay">
                                    <div class="spinner"></div>
                                    <div>{ "Gerando PDF..." }</div>
                                </div>
                            }
                        } else {
                            html! {}
                        }
                    }
                </div>
            </div>
        </OverlaySheet>
    }
}

fn field_or_blank(value: &str) -> String {
    if value.is_empty() {
        doc::CAMPO_VAZIO.to_string()
    } else {
        value.to_string()
    }
}

fn signature_block(label: &str, payload: &str, waiting: &str) -> Html {
    html! {
        <>
            <p class="doc-label"><strong>{ label }</strong></p>
            {
                if payload.is_empty() {
                    html! { <p class="waiting">{ waiting }</p> }
                } else {
                    html! { <img class="signature-image" src={payload.to_string()} alt={label.to_string()} /> }
                }
            }
        </>
    }
}

/// The formatted responsibility term, rendered from a record (committed or a
/// draft packed into a throwaway record for the preview step).
fn term_document(termo: &TermRecord) -> Html {
    html! {
        <div class="term-document">
            <p class="doc-section">{ doc::SECAO_PARTES }</p>
            <p><strong>{ "EMPREGADOR: " }</strong>{ doc::EMPREGADOR }</p>
            <p>{ doc::ENDERECO_EMPREGADOR }</p>
            <p>{ doc::CNPJ_EMPREGADOR }</p>
            <br />
            <p><strong>{ "FUNCIONÁRIO: " }</strong>{ field_or_blank(&termo.nome_funcionario) }</p>
            <p>{ format!("Cargo: {}", field_or_blank(&termo.cargo)) }</p>
            <p>{ format!("CPF: {}", field_or_blank(&termo.cpf)) }</p>
            <p>{ format!("Endereço: {}", field_or_blank(&termo.endereco_funcionario)) }</p>
            <br />
            <p class="doc-section">{ doc::SECAO_OBJETO }</p>
            <p>{ doc::OBJETO }</p>
            <br />
            <p class="doc-section">{ doc::SECAO_EQUIPAMENTO }</p>
            <p>{ format!("Tipo: {}", field_or_blank(&termo.tipo_equipamento)) }</p>
            <p>{ format!("Marca: {}", field_or_blank(&termo.marca)) }</p>
            <p>{ format!("Modelo: {}", field_or_blank(&termo.modelo)) }</p>
            <p>{ format!("Número de Série: {}", field_or_blank(&termo.numero_serie)) }</p>
            <p>{ format!("Acessórios: {}", field_or_blank(&termo.acessorios)) }</p>
            <br />
            <p class="doc-section">{ doc::SECAO_RESPONSABILIDADES }</p>
            <ul>
                { doc::RESPONSABILIDADES.iter().map(|item| html! { <li>{ *item }</li> }).collect::<Html>() }
            </ul>
            <br />
            <p class="doc-section">{ doc::SECAO_PENALIDADES }</p>
            <p>{ doc::PENALIDADES }</p>
            <br />
            <p class="doc-section">{ doc::SECAO_DISPOSICOES }</p>
            <p>{ doc::DISPOSICOES_FINAIS }</p>
            <br />
            <p class="doc-section">{ doc::SECAO_DECLARACAO }</p>
            <p>{ doc::DECLARACAO }</p>
            <br />
            <p>{ format!("Local e Data: {}", helpers::format_date(&termo.data)) }</p>
            { signature_block(
                "Assinatura do Representante do EMPREGADOR:",
                &termo.assinatura_tecnico,
                "Aguardando assinatura do técnico.",
            ) }
            { signature_block(
                "Assinatura do FUNCIONÁRIO:",
                &termo.assinatura_usuario,
                "Aguardando assinatura do funcionário.",
            ) }
        </div>
    }
}
