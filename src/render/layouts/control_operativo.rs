//! Control Operativo Layout Renderer
//!
//! Generates the fixed two-page consultation form for one case:
//! - Page 1: header and sections I-V
//! - Page 2: section VI (consultant declaration), signature and footer
//!
//! Every box has a fixed height. Text that does not fit is truncated, so the
//! document is always exactly two pages.

use printpdf::{Mm, PdfDocument, PdfPage, PdfSaveOptions};

use crate::config::Settings;
use crate::error::RenderError;
use crate::model::{optional_number, CaseRecord, DocumentType, Sex};

use crate::render::components::declaration::{render_footer, DeclarationRenderer};
use crate::render::components::form_table::{Cell, FormTableRenderer};
use crate::render::components::header::{render_case_badge, HeaderRenderer};
use crate::render::components::text_box::TextBoxRenderer;
use crate::render::helpers::crest::{AssetResolver, Crest};
use crate::render::helpers::encoding::checkbox;
use crate::render::helpers::finalize::finalize_pdf;
use crate::render::helpers::fonts::FontManager;
use crate::render::helpers::layer::LayerBuilder;
use crate::render::helpers::wrap::truncate_field;

/// Document title stored in the PDF metadata
const DOCUMENT_TITLE: &str = "Control Operativo de Consulta Jurídica";

/// Character budgets for fields printed in fixed-width cells
const CITY_BUDGET: usize = 35;
const PROFESSOR_BUDGET: usize = 60;
const STUDENT_BUDGET: usize = 60;
const AREA_BUDGET: usize = 60;
const REFERRAL_BUDGET: usize = 70;
const EMAIL_BUDGET: usize = 70;
const NAME_BUDGET: usize = 50;
const BIRTHPLACE_BUDGET: usize = 25;
const ISSUED_IN_BUDGET: usize = 18;
const ADDRESS_BUDGET: usize = 60;
const NEIGHBORHOOD_BUDGET: usize = 25;
const CIVIL_STATUS_BUDGET: usize = 40;
const OCCUPATION_BUDGET: usize = 50;
const EDUCATION_BUDGET: usize = 45;
const DOCUMENT_NUMBER_BUDGET: usize = 25;
const PHONE_BUDGET: usize = 25;

/// Renders a case record into the two-page Control Operativo PDF
pub struct ReportRenderer<'a> {
    settings: Settings,
    assets: &'a dyn AssetResolver,
}

impl<'a> ReportRenderer<'a> {
    pub fn new(settings: Settings, assets: &'a dyn AssetResolver) -> Self {
        Self { settings, assets }
    }

    /// Generate the PDF for one case
    pub fn render(&self, case: &CaseRecord) -> Result<Vec<u8>, RenderError> {
        let mut doc = PdfDocument::new(DOCUMENT_TITLE);
        let fonts = FontManager::new();
        let crest = Crest::load(&mut doc, self.assets);

        let mut first = LayerBuilder::new();
        self.render_first_page(&mut first, case, &fonts, &crest);

        let mut second = LayerBuilder::new();
        self.render_second_page(&mut second, &fonts);

        if self.settings.show_case_number {
            for layer in [&mut first, &mut second] {
                render_case_badge(layer, &fonts, &self.settings, case.id);
            }
        }

        let pages = vec![
            PdfPage::new(
                Mm(self.settings.page_width),
                Mm(self.settings.page_height),
                first.into_ops(),
            ),
            PdfPage::new(
                Mm(self.settings.page_width),
                Mm(self.settings.page_height),
                second.into_ops(),
            ),
        ];
        doc.with_pages(pages);

        let mut warnings = Vec::new();
        let bytes = doc.save(&PdfSaveOptions::default(), &mut warnings);
        if !warnings.is_empty() {
            log::debug!("PDF save produced {} warnings", warnings.len());
        }

        finalize_pdf(bytes).map_err(RenderError::PdfGeneration)
    }

    fn render_first_page(
        &self,
        layer: &mut LayerBuilder,
        case: &CaseRecord,
        fonts: &FontManager,
        crest: &Crest,
    ) {
        let s = &self.settings;
        let x = s.margin_left;
        let width = s.content_width();
        let gap = s.section_gap();
        let table = FormTableRenderer::new(fonts, s);

        let mut current_y = s.page_height - s.margin_top;

        current_y -= HeaderRenderer::new(fonts, crest, s).render(
            layer,
            (Mm(x), Mm(current_y)),
            width,
        );

        // I. Consultation details
        current_y -= table.render_section_header(
            layer,
            (Mm(x), Mm(current_y)),
            "I. DATOS DEL USUARIO",
        );
        for row in section_one_rows(case, s) {
            current_y -= table.render_row(layer, (Mm(x), Mm(current_y)), &row);
        }
        current_y -= gap;

        // II. Consultant information
        current_y -= table.render_section_header(
            layer,
            (Mm(x), Mm(current_y)),
            "II. INFORMACIÓN GENERAL DEL CONSULTANTE",
        );
        for row in section_two_rows(case) {
            current_y -= table.render_row(layer, (Mm(x), Mm(current_y)), &row);
        }
        current_y -= gap;

        // III. Case description
        current_y -= table.render_section_header(
            layer,
            (Mm(x), Mm(current_y)),
            "III. BREVE DESCRIPCIÓN DEL CASO",
        );
        current_y -= TextBoxRenderer::new(fonts.regular, s.small_font_size, s.wrap_chars).render(
            layer,
            (Mm(x), Mm(current_y)),
            width,
            s.description_box_height(),
            &case.case_description,
        );
        current_y -= gap;

        // IV. Student assessment
        current_y -= table.render_section_header(
            layer,
            (Mm(x), Mm(current_y)),
            "IV. CONCEPTO DEL ESTUDIANTE",
        );
        current_y -= TextBoxRenderer::new(fonts.regular, s.small_font_size, s.wrap_chars)
            .signature("Firma Estudiante:", 35.0)
            .render(
                layer,
                (Mm(x), Mm(current_y)),
                width,
                s.opinion_box_height(),
                &case.student_opinion,
            );
        current_y -= gap;

        // V. Advisor assessment
        current_y -= table.render_section_header(
            layer,
            (Mm(x), Mm(current_y)),
            "V. CONCEPTO DEL ASESOR JURÍDICO",
        );
        TextBoxRenderer::new(fonts.regular, s.small_font_size, s.wrap_chars)
            .signature("Firma Asesor:", 30.0)
            .render(
                layer,
                (Mm(x), Mm(current_y)),
                width,
                s.opinion_box_height(),
                &case.advisor_opinion,
            );
    }

    fn render_second_page(&self, layer: &mut LayerBuilder, fonts: &FontManager) {
        let s = &self.settings;
        let x = s.margin_left;
        let width = s.content_width();
        let table = FormTableRenderer::new(fonts, s);

        let mut current_y = s.page_height - s.margin_top;

        current_y -= table.render_section_header(
            layer,
            (Mm(x), Mm(current_y)),
            "VI. DECLARACIÓN DEL USUARIO",
        );
        DeclarationRenderer::new(fonts, s.small_font_size, s.wrap_chars).render(
            layer,
            (Mm(x), Mm(current_y)),
            width,
        );

        // Footer row top sits 10 mm above the bottom margin
        let footer_top = s.margin_bottom + 10.0;
        render_footer(
            layer,
            fonts.regular,
            s.footer_font_size,
            (Mm(x), Mm(footer_top)),
            width,
        );
    }
}

fn section_one_rows(case: &CaseRecord, settings: &Settings) -> Vec<Vec<Cell>> {
    let city = if case.city.trim().is_empty() {
        settings.default_city.as_str()
    } else {
        case.city.as_str()
    };

    vec![
        vec![
            Cell::left(format!("Ciudad: {}", truncate_field(city, CITY_BUDGET)), 0.55),
            Cell::center("Día", 0.10),
            Cell::center("Mes", 0.10),
            Cell::center("Año", 0.15),
            Cell::center("", 0.10),
        ],
        vec![
            Cell::left("", 0.55),
            Cell::center(optional_number(case.day), 0.10),
            Cell::center(optional_number(case.month), 0.10),
            Cell::center(optional_number(case.year), 0.15),
            Cell::center("", 0.10),
        ],
        vec![Cell::full(format!(
            "Nombre del Docente Responsable: {}",
            truncate_field(&case.professor_name, PROFESSOR_BUDGET)
        ))],
        vec![Cell::full(format!(
            "Nombre del Estudiante: {}",
            truncate_field(&case.student_name, STUDENT_BUDGET)
        ))],
        vec![Cell::full(format!(
            "Área de Consulta: {}",
            truncate_field(&case.consultation_area, AREA_BUDGET)
        ))],
    ]
}

fn section_two_rows(case: &CaseRecord) -> Vec<Vec<Cell>> {
    vec![
        vec![Cell::full(format!(
            "Remitido por: {}",
            truncate_field(&case.referred_by, REFERRAL_BUDGET)
        ))],
        vec![Cell::full(format!(
            "Correo electrónico: {}",
            truncate_field(&case.email, EMAIL_BUDGET)
        ))],
        vec![Cell::full(format!(
            "1. Nombre: {}",
            truncate_field(&case.consultant_name, NAME_BUDGET)
        ))],
        vec![
            Cell::left(format!("2. Edad: {}", optional_number(case.age)), 0.30),
            Cell::left(
                format!("3. Fecha de nacimiento   {}", case.birth_date_text()),
                0.70,
            ),
        ],
        vec![
            Cell::left(
                format!(
                    "4. Lugar de nacimiento: {}",
                    truncate_field(&case.birthplace, BIRTHPLACE_BUDGET)
                ),
                0.60,
            ),
            Cell::left(sex_text(case.sex), 0.40),
        ],
        vec![
            Cell::left(
                format!(
                    "7. Número de documento: {}",
                    truncate_field(&case.document_number, DOCUMENT_NUMBER_BUDGET)
                ),
                0.55,
            ),
            Cell::left(
                format!(
                    "8. Lugar de expedición: {}",
                    truncate_field(&case.issued_in, ISSUED_IN_BUDGET)
                ),
                0.45,
            ),
        ],
        vec![Cell::full(document_type_text(case.document_type))],
        vec![Cell::full(format!(
            "9. Dirección: {}",
            truncate_field(&case.address, ADDRESS_BUDGET)
        ))],
        vec![
            Cell::left(
                format!(
                    "10. Barrio: {}",
                    truncate_field(&case.neighborhood, NEIGHBORHOOD_BUDGET)
                ),
                0.50,
            ),
            Cell::left(
                format!("Estrato: {}", optional_number(case.stratum)),
                0.50,
            ),
        ],
        vec![
            Cell::left(
                format!(
                    "11. Número telefónico: {}",
                    truncate_field(&case.phone, PHONE_BUDGET)
                ),
                0.50,
            ),
            Cell::left(
                format!(
                    "12. Número celular: {}",
                    truncate_field(&case.cell_phone, PHONE_BUDGET)
                ),
                0.50,
            ),
        ],
        vec![Cell::full(format!(
            "13. Estado civil actual: {}",
            truncate_field(&case.civil_status, CIVIL_STATUS_BUDGET)
        ))],
        vec![Cell::full(format!(
            "15. Profesión u oficio: {}",
            truncate_field(&case.occupation, OCCUPATION_BUDGET)
        ))],
        vec![Cell::full(format!(
            "14. Escolaridad: {}",
            truncate_field(&case.education, EDUCATION_BUDGET)
        ))],
    ]
}

fn sex_text(sex: Sex) -> String {
    format!(
        "5. Sexo   Femenino {}   Masculino {}",
        checkbox(sex == Sex::Female),
        checkbox(sex == Sex::Male)
    )
}

fn document_type_text(doc: DocumentType) -> String {
    format!(
        "{} T.I.    {} C.C.    {} NUIP",
        checkbox(doc == DocumentType::MinorId),
        checkbox(doc == DocumentType::CitizenId),
        checkbox(doc == DocumentType::ForeignId)
    )
}
