//! Complexity criterion catalog
//!
//! Static configuration data for the pro estimator's matrix: four criteria,
//! each with three weighted options. The catalog is what the UI renders;
//! the scoring itself only needs the chosen weights (see `ComplexitySelection`).

use crate::domain::value_objects::Weight;
use serde::{Deserialize, Serialize};

/// Identifies one of the four complexity criteria
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CriterionKey {
    /// Front-end surface (number of screens)
    Screens,
    /// Interface/UX richness
    Design,
    /// Back-end and data complexity
    Database,
    /// Integrations and business logic
    Integrations,
}

impl CriterionKey {
    /// All criteria in canonical display order
    pub fn all() -> [CriterionKey; 4] {
        [
            CriterionKey::Screens,
            CriterionKey::Design,
            CriterionKey::Database,
            CriterionKey::Integrations,
        ]
    }
}

/// One selectable option within a criterion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CriterionOption {
    pub weight: Weight,
    pub short_label: &'static str,
    pub description: &'static str,
}

/// One row of the complexity matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComplexityCriterion {
    pub key: CriterionKey,
    pub label: &'static str,
    pub options: [CriterionOption; 3],
}

impl ComplexityCriterion {
    /// Look up the option carrying the given weight
    pub fn option_for(&self, weight: Weight) -> &CriterionOption {
        // Options are stored in ascending weight order.
        &self.options[(weight.points() - 1) as usize]
    }
}

/// The canonical four-criterion matrix
pub const COMPLEXITY_CRITERIA: [ComplexityCriterion; 4] = [
    ComplexityCriterion {
        key: CriterionKey::Screens,
        label: "Front-end (Telas)",
        options: [
            CriterionOption {
                weight: Weight::Light,
                short_label: "Até 3 telas",
                description: "Landing Page / Simples",
            },
            CriterionOption {
                weight: Weight::Moderate,
                short_label: "4 a 10 telas",
                description: "Dashboard / Sistema",
            },
            CriterionOption {
                weight: Weight::Heavy,
                short_label: "11+ telas",
                description: "Complexo / Multi-fluxo",
            },
        ],
    },
    ComplexityCriterion {
        key: CriterionKey::Design,
        label: "Interface (CSS/UX)",
        options: [
            CriterionOption {
                weight: Weight::Light,
                short_label: "Padrão / Limpo",
                description: "CSS Básico / Template",
            },
            CriterionOption {
                weight: Weight::Moderate,
                short_label: "Customizado",
                description: "Responsivo Fino / Branding",
            },
            CriterionOption {
                weight: Weight::Heavy,
                short_label: "Interativo",
                description: "Animações / Motion",
            },
        ],
    },
    ComplexityCriterion {
        key: CriterionKey::Database,
        label: "Back-end & Dados",
        options: [
            CriterionOption {
                weight: Weight::Light,
                short_label: "Leitura/Escrita",
                description: "CRUD Simples",
            },
            CriterionOption {
                weight: Weight::Moderate,
                short_label: "Permissões + Storage",
                description: "Regras de Acesso / Arquivos",
            },
            CriterionOption {
                weight: Weight::Heavy,
                short_label: "Realtime + Jobs",
                description: "Chat / Notificações / Cron",
            },
        ],
    },
    ComplexityCriterion {
        key: CriterionKey::Integrations,
        label: "Integrações & Lógica",
        options: [
            CriterionOption {
                weight: Weight::Light,
                short_label: "Nenhuma",
                description: "Lógica interna apenas",
            },
            CriterionOption {
                weight: Weight::Moderate,
                short_label: "1 API Simples",
                description: "CEP / Clima / Email",
            },
            CriterionOption {
                weight: Weight::Heavy,
                short_label: "Complexas",
                description: "Pagamento / IA / Webhooks",
            },
        ],
    },
];

/// Find the catalog entry for a criterion key
pub fn criterion(key: CriterionKey) -> &'static ComplexityCriterion {
    let index = match key {
        CriterionKey::Screens => 0,
        CriterionKey::Design => 1,
        CriterionKey::Database => 2,
        CriterionKey::Integrations => 3,
    };
    &COMPLEXITY_CRITERIA[index]
}
