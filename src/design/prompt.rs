//! # 提示词与响应 schema 构建
//!
//! 把用户需求拼装成发送给生成式 AI 的自然语言提示词，
//! 并给出要求模型遵循的 JSON 响应 schema。
//!
//! ## 依赖关系
//! - 被 `design/client.rs` 调用
//! - 使用 `models/material.rs` 的 UserRequirements
//! - 使用 `serde_json` 构建 schema

use crate::models::{Biodegradability, Conductivity, Elasticity, UserRequirements};
use serde_json::{json, Value};

/// 可选物性行，"Not Required" 的条目不出现
fn specific_properties(req: &UserRequirements) -> String {
    let mut lines = Vec::new();
    if req.conductivity != Conductivity::NotRequired {
        lines.push(format!("- Electrical Conductivity: {}", req.conductivity));
    }
    if req.elasticity != Elasticity::NotRequired {
        lines.push(format!("- Elasticity / Young's Modulus: {}", req.elasticity));
    }
    if req.biodegradability != Biodegradability::NotRequired {
        lines.push(format!("- Biodegradability: {}", req.biodegradability));
    }
    lines.join("\n")
}

/// 构建提示词
pub fn build_prompt(req: &UserRequirements) -> String {
    let properties = specific_properties(req);
    let properties_block = if properties.is_empty() {
        String::new()
    } else {
        format!("\n**Specific Properties:**\n{}", properties)
    };
    let regulatory_line = if req.regulatory_compliance.is_empty() {
        String::new()
    } else {
        format!(
            "- **Regulatory & Compliance Needs:** {}",
            req.regulatory_compliance
        )
    };

    format!(
        r#"
Act as an expert consortium of computational chemists, materials scientists, and quantum physicists specializing in sustainable functional soft materials.
Your task is to perform a comprehensive design and validation process based on user-provided requirements.
The output must be a single, valid JSON object matching the provided schema, with no markdown.

**Process Overview:**
1.  **Plausibility & Consistency Analysis:** First, critically evaluate all user-provided requirements for scientific plausibility and internal consistency.
    - **Cross-Validation Check:** You MUST specifically check if the requested 'Specific Properties' (e.g., conductivity, elasticity) and 'Regulatory & Compliance Needs' are scientifically consistent with the 'Primary Functionality' and 'Intended Use Case'. For example, a request for a 'highly conductive' material for an 'electrical insulation' application is a direct contradiction.
    - **Reporting Contradictions:** If any requirements are contradictory or scientifically implausible, you MUST:
        a) Clearly state the specific contradiction in the 'description' field.
        b) Propose a more viable alternative material or a revision of the contradictory properties that still attempts to satisfy the user's core goals.
        c) Explicitly flag the specific contradiction you identified in the 'validationSummary' field.
    - If all requirements are plausible and consistent, proceed with the design.
2.  **Material Design:** Invent a novel, hypothetical material that meets the (potentially revised) requirements.
3.  **Methodology Generation:** Propose a detailed, step-by-step synthesis methodology for the material. This procedure should be grounded in established chemical reactions and techniques (e.g., polymerization, sol-gel, self-assembly). Include ingredients, equipment, and critical parameters.
4.  **Validation & Reasoning:** Justify your design and methodology. Explain the scientific principles behind your choices. Act as if you are cross-referencing multiple established chemical principles and synthesis techniques to validate your proposed procedure. Conclude with a confidence assessment.

**User Requirements:**
- **Primary Functionality:** {functionality}
- **Intended Use Case:** {use_case}
- **Material Compatibility:** {compatibility}
- **Operating Environment:** {environment}
{properties_block}
{regulatory_line}

**Final Output Instructions:**
- Generate a scientifically plausible name.
- Write the comprehensive description (including the plausibility and consistency analysis).
- Generate the atomic coordinates in valid XYZ format.
- Detail the synthesis methodology.
- Provide the validation summary (including any flagged contradictions).
- Return the entire response as a single JSON object.
"#,
        functionality = req.functionality,
        use_case = req.use_case,
        compatibility = req.compatibility,
        environment = req.environment,
        properties_block = properties_block,
        regulatory_line = regulatory_line,
    )
}

/// 响应 schema（Gemini `responseSchema` 格式）
pub fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "materialName": {
                "type": "STRING",
                "description": "A novel, plausible name for the generated material."
            },
            "description": {
                "type": "STRING",
                "description": "A detailed scientific description of the material's properties, structure, and potential applications. If the user's requirements are scientifically implausible or contradictory, explain why here and propose a viable alternative that still meets the user's core goals."
            },
            "xyzCoordinates": {
                "type": "STRING",
                "description": "A string representing the molecular structure in valid XYZ file format. The first line is the atom count, the second is the material name, and subsequent lines are 'Element X Y Z' coordinates. Generate a plausible small molecule or repeating unit (5-30 atoms) for the material."
            },
            "synthesisMethodology": {
                "type": "STRING",
                "description": "A detailed, step-by-step hypothetical synthesis methodology. Include necessary ingredients/precursors, equipment, and environmental parameters (e.g., temperature, pressure, catalysts, solvents). Structure this as a formal procedure."
            },
            "validationSummary": {
                "type": "STRING",
                "description": "A summary explaining the scientific reasoning and validation process. If any user requirements were contradictory, flag them here. Justify the plausibility of the material and its synthesis route by referencing general principles from established research and chemical knowledge from your training data. State a confidence level (e.g., High, Medium, Speculative)."
            }
        },
        "required": [
            "materialName",
            "description",
            "xyzCoordinates",
            "synthesisMethodology",
            "validationSummary"
        ]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_requirements() -> UserRequirements {
        UserRequirements {
            functionality: "Self-healing elastomer".to_string(),
            use_case: "Soft robotics".to_string(),
            compatibility: "Non-toxic".to_string(),
            environment: "Humid".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_prompt_contains_requirements() {
        let prompt = build_prompt(&base_requirements());
        assert!(prompt.contains("- **Primary Functionality:** Self-healing elastomer"));
        assert!(prompt.contains("- **Intended Use Case:** Soft robotics"));
        assert!(prompt.contains("- **Material Compatibility:** Non-toxic"));
        assert!(prompt.contains("- **Operating Environment:** Humid"));
    }

    #[test]
    fn test_prompt_omits_not_required_properties() {
        let prompt = build_prompt(&base_requirements());
        assert!(!prompt.contains("**Specific Properties:**"));
        assert!(!prompt.contains("Regulatory & Compliance Needs:**"));
    }

    #[test]
    fn test_prompt_includes_selected_properties() {
        let req = UserRequirements {
            conductivity: Conductivity::Insulator,
            biodegradability: Biodegradability::High,
            regulatory_compliance: "RoHS".to_string(),
            ..base_requirements()
        };
        let prompt = build_prompt(&req);

        assert!(prompt.contains("**Specific Properties:**"));
        assert!(prompt.contains("- Electrical Conductivity: Insulator"));
        assert!(prompt.contains("- Biodegradability: High"));
        assert!(!prompt.contains("Elasticity / Young's Modulus"));
        assert!(prompt.contains("- **Regulatory & Compliance Needs:** RoHS"));
    }

    #[test]
    fn test_schema_requires_all_fields() {
        let schema = response_schema();
        let required = schema["required"].as_array().unwrap();
        assert_eq!(required.len(), 5);
        assert!(required.iter().any(|v| v == "xyzCoordinates"));
        assert_eq!(schema["properties"]["materialName"]["type"], "STRING");
    }
}
