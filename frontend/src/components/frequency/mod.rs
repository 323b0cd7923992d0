//! Attendance sheet (lista de frequência) for a training session: the course
//! data card, an 18-row participant table, and a modal signature pad. Rows
//! live only in component memory; the sheet is filled, signed, and printed in
//! one sitting.

use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::signature::{self, SignaturePad};
use crate::overlay::sheet::{close_sheet, open_sheet, OverlaySheet};

const PARTICIPANT_ROWS: usize = 18;

struct CourseInfo {
    curso: &'static str,
    data: &'static str,
    horario: &'static str,
    carga_horaria: &'static str,
    local: &'static str,
    instrutor: &'static str,
    conteudo: &'static str,
}

const COURSE: CourseInfo = CourseInfo {
    curso: "CURSO NR 35 TRABALHO EM ALTURA",
    data: "21/02/2025",
    horario: "08:00h-12:00h | 13:00h-17:00h",
    carga_horaria: "8 h",
    local: "Projeta",
    instrutor: "Erick Castro",
    conteudo: "Conceitos;
Equipamentos para trabalho em altura com andaimes;
Plataformas de trabalho aéreo;
Equipamentos de guindar para elevação de pessoas;
Tipos de escadas;
Passarela para telhado;
Balancim;
Acesso por cordas;
Equipamentos de segurança – Cinturão de segurança (talabarte duplo, trava quedas retrátil, trava quedas de posição, linha de vida, acesso por cordas);
Riscos e medidas de prevenção;
Normas e regulamentos;
Noções de Primeiros Socorros.",
};

#[derive(Default, Clone)]
struct Participant {
    nome: String,
    cpf: String,
    empresa: String,
    assinatura: String,
}

#[derive(Clone, Copy)]
pub enum ParticipantField {
    Nome,
    Cpf,
    Empresa,
}

pub enum Msg {
    Edit(usize, ParticipantField, String),
    OpenSignature(usize),
    ClearSignature,
    SaveSignature,
    CancelSignature,
}

pub struct FrequencyComponent {
    participants: Vec<Participant>,
    selected: Option<usize>,
    modal_ref: NodeRef,
    pad_ref: NodeRef,
}

impl Component for FrequencyComponent {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            participants: vec![Participant::default(); PARTICIPANT_ROWS],
            selected: None,
            modal_ref: NodeRef::default(),
            pad_ref: NodeRef::default(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Edit(row, field, value) => {
                if let Some(p) = self.participants.get_mut(row) {
                    match field {
                        ParticipantField::Nome => p.nome = value,
                        ParticipantField::Cpf => p.cpf = value,
                        ParticipantField::Empresa => p.empresa = value,
                    }
                }
                false
            }
            Msg::OpenSignature(row) => {
                self.selected = Some(row);
                signature::clear(&self.pad_ref);
                open_sheet(self.modal_ref.clone());
                true
            }
            Msg::ClearSignature => {
                signature::clear(&self.pad_ref);
                false
            }
            Msg::SaveSignature => {
                // Only a non-blank pad overwrites the row; closing is
                // unconditional, matching the capture-or-dismiss flow.
                if let Some(row) = self.selected {
                    if let Some(data_url) = signature::capture_trimmed(&self.pad_ref) {
                        if let Some(p) = self.participants.get_mut(row) {
                            p.assinatura = data_url;
                        }
                    }
                }
                self.selected = None;
                close_sheet(self.modal_ref.clone());
                true
            }
            Msg::CancelSignature => {
                self.selected = None;
                close_sheet(self.modal_ref.clone());
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        let rows = self
            .participants
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let cell = |field: ParticipantField, value: &str, placeholder: &'static str| {
                    html! {
                        <td>
                            <input
                                value={value.to_string()}
                                placeholder={placeholder}
                                oninput={link.callback(move |e: InputEvent| {
                                    Msg::Edit(i, field, e.target_unchecked_into::<HtmlInputElement>().value())
                                })}
                            />
                        </td>
                    }
                };

                html! {
                    <tr>
                        <td class="centered">{ i + 1 }</td>
                        { cell(ParticipantField::Nome, &p.nome, "Digite o nome") }
                        { cell(ParticipantField::Cpf, &p.cpf, "Digite o CPF") }
                        { cell(ParticipantField::Empresa, &p.empresa, "Digite a empresa") }
                        <td class="centered">
                            {
                                if p.assinatura.is_empty() {
                                    html! {
                                        <button class="btn small" onclick={link.callback(move |_| Msg::OpenSignature(i))}>
                                            { "Assinar" }
                                        </button>
                                    }
                                } else {
                                    html! { <img class="signature-thumb" src={p.assinatura.clone()} alt={format!("Assinatura {}", i + 1)} /> }
                                }
                            }
                        </td>
                    </tr>
                }
            })
            .collect::<Html>();

        html! {
            <div class="frequency-page">
                <div class="card">
                    <div class="card-header"><h2>{ COURSE.curso }</h2></div>
                    <div class="card-body course-info">
                        <p><strong>{ "Data: " }</strong>{ COURSE.data }</p>
                        <p><strong>{ "Horário: " }</strong>{ COURSE.horario }</p>
                        <p><strong>{ "Carga Horária: " }</strong>{ COURSE.carga_horaria }</p>
                        <p><strong>{ "Local: " }</strong>{ COURSE.local }</p>
                        <p><strong>{ "Instrutor: " }</strong>{ COURSE.instrutor }</p>
                        <p><strong>{ "Conteúdo Programático:" }</strong></p>
                        <p class="course-content">{ COURSE.conteudo }</p>
                    </div>
                </div>

                <div class="card">
                    <div class="card-header"><h2>{ "Lista de Controle de Frequência" }</h2></div>
                    <div class="card-body table-wrap">
                        <table class="frequency-table">
                            <thead>
                                <tr>
                                    <th>{ "Nº" }</th>
                                    <th>{ "Nome Completo" }</th>
                                    <th>{ "CPF" }</th>
                                    <th>{ "Empresa" }</th>
                                    <th>{ "Assinatura" }</th>
                                </tr>
                            </thead>
                            <tbody>{ rows }</tbody>
                        </table>
                    </div>
                </div>

                <OverlaySheet node_ref={self.modal_ref.clone()}>
                    <div class="sheet-backdrop">
                        <div class="sheet-panel">
                            <h2>{ "Assine Aqui" }</h2>
                            <div class="signature-frame">
                                <SignaturePad canvas_ref={self.pad_ref.clone()} width={300} height={150} />
                            </div>
                            <div class="sheet-actions">
                                <button class="btn" onclick={link.callback(|_| Msg::ClearSignature)}>{ "Limpar" }</button>
                                <button class="btn" onclick={link.callback(|_| Msg::CancelSignature)}>{ "Cancelar" }</button>
                                <button class="btn primary" onclick={link.callback(|_| Msg::SaveSignature)}>{ "Salvar" }</button>
                            </div>
                        </div>
                    </div>
                </OverlaySheet>
            </div>
        }
    }
}
