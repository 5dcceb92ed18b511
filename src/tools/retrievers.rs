//! Knowledge retrievers offered to staff agents.
//!
//! Each retriever answers with a tagged placeholder describing the corpus it
//! would search. A real vector-store backend slots in behind [`Retriever`]
//! without touching the agents.

use super::registry::ToolRegistry;
use super::traits::{Tool, ToolResult};
use async_trait::async_trait;
use serde_json::{Value, json};
use std::sync::Arc;
use strum::{EnumIter, IntoEnumIterator, IntoStaticStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr)]
pub enum RetrieverKind {
    #[strum(serialize = "doctrine_retriever")]
    Doctrine,
    #[strum(serialize = "geopolitics_retriever")]
    Geopolitics,
    #[strum(serialize = "logistics_retriever")]
    Logistics,
    #[strum(serialize = "cyberintel_retriever")]
    CyberIntel,
    #[strum(serialize = "terrain_retriever")]
    Terrain,
    #[strum(serialize = "orbat_retriever")]
    Orbat,
}

impl RetrieverKind {
    pub fn tool_name(self) -> &'static str {
        self.into()
    }

    fn tag(self) -> &'static str {
        match self {
            Self::Doctrine => "DOCTRINE_RETRIEVAL",
            Self::Geopolitics => "GEOPOLITICS_RETRIEVAL",
            Self::Logistics => "LOGISTICS_RETRIEVAL",
            Self::CyberIntel => "CYBERINTEL_RETRIEVAL",
            Self::Terrain => "TERRAIN_RETRIEVAL",
            Self::Orbat => "ORBAT_RETRIEVAL",
        }
    }

    fn description(self) -> &'static str {
        match self {
            Self::Doctrine => {
                "Retrieves relevant joint doctrine, Law of Armed Conflict (LOAC), AI policy, \
                 military regulations, and doctrinal frameworks. Use this to find authoritative \
                 guidance on military operations, legal constraints, and established procedures. \
                 Input should be a specific question or topic."
            }
            Self::Geopolitics => {
                "Retrieves geopolitical context including regional dynamics, alliance structures, \
                 international relations, historical precedents, and current political tensions. \
                 Use for understanding the strategic environment and political implications of \
                 military actions. Input should be a specific question about geopolitical factors."
            }
            Self::Logistics => {
                "Retrieves logistics and sustainment information including supply routes, POL \
                 (petroleum, oils, lubricants), ammunition stockage, maintenance capabilities, \
                 transportation networks, and infrastructure data. Use for assessing feasibility \
                 and sustainment requirements. Input should be a specific logistics-related question."
            }
            Self::CyberIntel => {
                "Retrieves cyber threat intelligence including known threat actor TTPs, recent \
                 cyber incidents, infrastructure vulnerabilities, AI-enabled threats, and \
                 information environment assessments. Use for understanding cyber threats and \
                 information warfare considerations. Input should be a specific cyber/information \
                 security question."
            }
            Self::Terrain => {
                "Retrieves terrain and geographic analysis including OAKOC (Observation, Avenues \
                 of Approach, Key Terrain, Obstacles, Cover/Concealment), weather impacts, \
                 infrastructure, and lines of communication. Use for operational geography \
                 questions. Input should be a specific terrain-related question."
            }
            Self::Orbat => {
                "Retrieves Order of Battle (ORBAT) information including friendly and enemy force \
                 structures, unit capabilities, equipment, weapons systems, and readiness levels. \
                 Use for force correlation and capability assessment. Input should be a specific \
                 question about forces or units."
            }
        }
    }

    fn coverage(self) -> &'static [&'static str] {
        match self {
            Self::Doctrine => &[
                "Joint Publications (JP 3-0, JP 5-0, etc.)",
                "LOAC/IHL references",
                "AI/Autonomy policy (DoDD 3000.09)",
                "ROE frameworks",
            ],
            Self::Geopolitics => &[
                "Regional political dynamics",
                "Alliance structures",
                "Historical precedents",
                "Current tensions and flashpoints",
            ],
            Self::Logistics => &[
                "Supply route analysis",
                "Stockage levels",
                "POL distribution networks",
                "Maintenance and repair capabilities",
            ],
            Self::CyberIntel => &[
                "Known threat actor TTPs",
                "Recent cyber incidents",
                "Infrastructure vulnerabilities",
                "AI-enabled threat capabilities",
            ],
            Self::Terrain => &[
                "OAKOC analysis",
                "Key terrain features",
                "Weather impacts",
                "Infrastructure and LOCs",
            ],
            Self::Orbat => &[
                "Friendly force structure",
                "Enemy order of battle",
                "Unit capabilities and readiness",
                "Equipment and weapons systems",
            ],
        }
    }

    fn corpus(self) -> &'static str {
        match self {
            Self::Doctrine => "doctrine",
            Self::Geopolitics => "geopolitics",
            Self::Logistics => "logistics",
            Self::CyberIntel => "cyber intel",
            Self::Terrain => "terrain",
            Self::Orbat => "ORBAT",
        }
    }

    /// Placeholder answer for `query`.
    pub fn answer(self, query: &str) -> String {
        let bullets: String = self
            .coverage()
            .iter()
            .map(|item| format!("\n- {item}"))
            .collect();
        format!(
            "[{}] Query: '{query}'\n\nPlaceholder response - Connect to {} vector store for:{bullets}",
            self.tag(),
            self.corpus()
        )
    }
}

/// A single-argument lookup tool backed by one knowledge corpus.
pub struct Retriever {
    kind: RetrieverKind,
}

impl Retriever {
    pub fn new(kind: RetrieverKind) -> Self {
        Self { kind }
    }
}

#[async_trait]
impl Tool for Retriever {
    fn name(&self) -> &str {
        self.kind.tool_name()
    }

    fn description(&self) -> &str {
        self.kind.description()
    }

    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "The specific question or topic to look up"
                }
            },
            "required": ["query"]
        })
    }

    async fn execute(&self, args: Value) -> anyhow::Result<ToolResult> {
        let Some(query) = args
            .get("query")
            .or_else(|| args.get("__arg1"))
            .and_then(Value::as_str)
            .or_else(|| args.as_str())
        else {
            return Ok(ToolResult::failed("Missing 'query' parameter"));
        };
        Ok(ToolResult::ok(self.kind.answer(query)))
    }
}

/// Registry holding every retriever.
pub fn retriever_registry() -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    for kind in RetrieverKind::iter() {
        registry.register(Arc::new(Retriever::new(kind)));
    }
    registry
}
