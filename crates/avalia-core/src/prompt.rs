//! Prompt text for the analysis model.
//!
//! The prompt is Portuguese, like the form it is built from. Values are
//! interpolated verbatim: the destination is free text, not markup.

use crate::models::record::AssessmentRecord;

const INSTRUCTIONS: &str = "\
Por favor, analise os seguintes dados de uma avaliação física funcional e forneça um resumo \
profissional, mas de fácil compreensão, em português.
Destaque os pontos positivos, as áreas que necessitam de atenção e forneça recomendações gerais \
com base no objetivo do indivíduo.
Formate a resposta usando apenas markdown simples: **negrito**, *itálico* e itens de lista \
iniciados por \"- \".";

/// Build the analysis prompt for `record`.
///
/// Deterministic and total: an all-empty record yields the same template
/// with empty values.
pub fn format_prompt(record: &AssessmentRecord) -> String {
    let id = &record.identification;
    let anthro = &record.anthropometrics;
    let perim = &record.perimeters;
    let comp_assessment = &record.body_comp_assessment;
    let comp = &record.body_composition;
    let cardio = &record.cardio;
    let neuro = &record.neuromuscular;

    let mut out = String::with_capacity(2048);
    out.push_str(INSTRUCTIONS);
    out.push_str("\n\n");

    push_section(
        &mut out,
        "DADOS DE IDENTIFICAÇÃO",
        &[
            ("Nome", id.name.clone()),
            ("Idade", id.age.clone()),
            ("Sexo", id.sex.clone()),
            ("Objetivo", id.objective.clone()),
        ],
    );

    push_section(
        &mut out,
        "DADOS ANTROPOMÉTRICOS",
        &[
            ("Altura", format!("{} cm", anthro.height)),
            ("Peso", format!("{} kg", anthro.weight)),
            ("IMC (Índice de Massa Corpórea)", anthro.bmi.clone()),
            ("IRCQ (Índice Relação Cintura-Quadril)", anthro.whr.clone()),
            ("Risco Estimado IRCQ", anthro.whr_risk.clone()),
            (
                "Pressão Arterial em Repouso",
                format!(
                    "{}/{} mmHg",
                    anthro.blood_pressure, anthro.resting_blood_pressure
                ),
            ),
        ],
    );

    push_section(
        &mut out,
        "PERÍMETROS (cm)",
        &[
            ("Ombros", perim.shoulders.clone()),
            ("Tórax", perim.chest.clone()),
            ("Cintura", perim.waist.clone()),
            ("Abdômen", perim.abdomen.clone()),
            ("Quadril", perim.hip.clone()),
        ],
    );

    push_section(
        &mut out,
        "COMPOSIÇÃO CORPORAL",
        &[
            ("Protocolo", comp_assessment.protocol.clone()),
            (
                "Percentual de Gordura",
                format!(
                    "{}% ({})",
                    comp_assessment.fat_percentage, comp_assessment.fat_percentage_class
                ),
            ),
            ("Peso de Gordura", format!("{} kg", comp.fat_weight)),
            ("Massa Magra", format!("{} kg", comp.lean_mass)),
        ],
    );

    push_section(
        &mut out,
        "DADOS CARDIORRESPIRATÓRIOS",
        &[
            (
                "Frequência Cardíaca em Repouso",
                format!("{} bpm", cardio.resting_hr),
            ),
            (
                "VO₂máx Predito",
                format!("{} ml(Kg.min)-¹", cardio.vo2max),
            ),
        ],
    );

    push_section(
        &mut out,
        "AVALIAÇÃO NEUROMUSCULAR",
        &[
            (
                "Abdominal",
                format!(
                    "{} repetições ({})",
                    neuro.abdominal_reps, neuro.abdominal_class
                ),
            ),
            (
                "Flexão de Braço",
                format!("{} repetições ({})", neuro.pushup_reps, neuro.pushup_class),
            ),
        ],
    );

    // The indication is free text with no label of its own.
    out.push_str("**INDICAÇÃO DE TREINO:**\n");
    out.push_str(&format!("- {}\n", record.postural.indication));

    out
}

fn push_section(out: &mut String, title: &str, items: &[(&str, String)]) {
    out.push_str(&format!("**{title}:**\n"));
    for (label, value) in items {
        out.push_str(&format!("- **{label}:** {value}\n"));
    }
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::set_field;
    use crate::models::record::{AnthropometricsField, IdentificationField, SkinfoldsField};

    #[test]
    fn embeds_the_selected_fields() {
        let record = AssessmentRecord::default_snapshot();
        let prompt = format_prompt(&record);

        assert!(prompt.contains("- **Nome:** ivan lima de azevedo\n"));
        assert!(prompt.contains("- **Idade:** 57 anos 2 meses\n"));
        assert!(prompt.contains("- **Objetivo:** perda de peso\n"));
        assert!(prompt.contains("- **Altura:** 164.00 cm\n"));
        assert!(prompt.contains("- **IMC (Índice de Massa Corpórea):** 26.03\n"));
        assert!(prompt.contains("- **Risco Estimado IRCQ:** Muito Alto\n"));
        assert!(prompt.contains("- **Pressão Arterial em Repouso:** 14/9 mmHg\n"));
        assert!(prompt.contains("- **Quadril:** 97.00\n"));
        assert!(prompt.contains("- **Protocolo:** Guedes (1985)\n"));
        assert!(prompt.contains("- **Percentual de Gordura:** 30.31% (Média)\n"));
        assert!(prompt.contains("- **Massa Magra:** 48.78 kg\n"));
        assert!(prompt.contains("- **Frequência Cardíaca em Repouso:** 72.0 bpm\n"));
        assert!(prompt.contains("- **VO₂máx Predito:** 25.06 ml(Kg.min)-¹\n"));
        assert!(prompt.contains("- **Abdominal:** 9 repetições (Médio)\n"));
        assert!(prompt.contains("- **Flexão de Braço:** 6 repetições (Médio)\n"));
        assert!(prompt.ends_with("**INDICAÇÃO DE TREINO:**\n- treino de segunda a sabado\n"));
    }

    #[test]
    fn asks_for_the_constrained_markdown_subset() {
        let prompt = format_prompt(&AssessmentRecord::default());
        assert!(prompt.starts_with("Por favor, analise"));
        assert!(prompt.contains("pontos positivos"));
        assert!(prompt.contains("**negrito**, *itálico*"));
    }

    #[test]
    fn is_deterministic_and_total_for_empty_records() {
        let empty = AssessmentRecord::default();
        let first = format_prompt(&empty);
        let second = format_prompt(&empty.clone());

        assert_eq!(first, second);
        assert!(first.contains("- **Nome:** \n"));
        assert!(first.contains("- **Pressão Arterial em Repouso:** / mmHg\n"));
    }

    #[test]
    fn interpolates_values_verbatim() {
        let record = set_field(
            &AssessmentRecord::default(),
            IdentificationField::Name,
            "Maria **\"{x}\"** <b>",
        );
        let prompt = format_prompt(&record);
        assert!(prompt.contains("- **Nome:** Maria **\"{x}\"** <b>\n"));
    }

    #[test]
    fn ignores_fields_outside_the_template() {
        let record = AssessmentRecord::default_snapshot();
        let edited = set_field(&record, SkinfoldsField::Biceps, "99.99");
        assert_eq!(format_prompt(&record), format_prompt(&edited));

        let edited = set_field(&record, AnthropometricsField::Bmi, "30.00");
        assert_ne!(format_prompt(&record), format_prompt(&edited));
    }
}
