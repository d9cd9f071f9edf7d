use crate::models::domain::WorkedExample;

pub const EVALUATION_EXPERT_SYSTEM_PROMPT: &str =
    "You are an expert in dataset evaluation and FAIR principles assessment.";

pub const FAIR_EXPERT_SYSTEM_PROMPT: &str =
    "You are an expert in FAIR data assessment. Follow the rubric exactly and be consistent.";

pub const FAIR_SCORING_RUBRIC: &str = "
Evaluate the FAIR (Findable, Accessible, Interoperable, Reusable) principles using the scoring rubric:

### 1. Findable (Max: 17)
- Identifiers:
  - 8: DOI, PURL, ARK, Handle
  - 3: URL
  - 1: Local ID
  - 0: None
- Identifier in metadata: 1 or 0
- Metadata description:
  - 4: Comprehensive, machine-readable
  - 3: Comprehensive, non-standard
  - 2: Basic title/desc
  - 0: None
- Repository inclusion:
  - 4: Multiple repos
  - 2: General/domain-specific
  - 0: None

### 2. Accessible (Max: 10)
- Data access:
  - 5: Public or stated conditions
  - 4: De-identified subset
  - 3: Embargoed
  - 2: Unclear
  - 1: Metadata only
  - 0: No access
- Online availability:
  - 4: Standard API
  - 3: Non-standard API
  - 2: File download
  - 1: On request
  - 0: None
- Metadata persistence: 1 or 0

### 3. Interoperable (Max: 8)
- Format:
  - 2: Open machine-readable
  - 1: Structured non-machine-readable
  - 0: Proprietary
- Vocab/ontologies:
  - 3: Open & resolvable
  - 2: Standardized only
  - 1: No standard
  - 0: No description
- Metadata linking:
  - 3: Linked data (e.g., RDF)
  - 2: URI links
  - 0: None

### 4. Reusable (Max: 7)
- License:
  - 4: Machine-readable (e.g., CC)
  - 3: Standard text
  - 2: Non-standard
  - 0: No license
- Provenance:
  - 3: Machine-readable
  - 2: Full, text format
  - 1: Partial
  - 0: None
";

pub const EPA_UCMR3_EXAMPLE: WorkedExample = WorkedExample {
    dataset_name: "EPA UCMR3 PFAS Data",
    url: "https://www.epa.gov/dwucmr/occurrence-data-unregulated-contaminant-monitoring-rule#3",
    rationale: &[
        "Findable: URL (3), identifier in metadata (1), basic metadata (3), listed in EPA repo (2) → F-Score = 9/17",
        "Accessible: Public access (5), direct file download (2), persistent metadata (1) → A-Score = 8/10",
        "Interoperable: Open CSV format (2), uses standardized vocabularies (3), no linked metadata (2) → I-Score = 7/8",
        "Reusable: Machine-readable license missing (2), provenance described in text (2) → R-Score = 4/7",
    ],
    scores: [9, 8, 7, 4],
};

pub const NEID_EXAMPLE: WorkedExample = WorkedExample {
    dataset_name: "National Earthquake Information Database",
    url: "https://www.gns.cri.nz/data-and-resources/national-earthquake-information-database/",
    rationale: &[
        "Findable: 12/17",
        "Accessible: 8/10",
        "Interoperable: 5/8",
        "Reusable: 5/7",
    ],
    scores: [12, 8, 5, 5],
};

pub const EXAMPLES_HANDOFF: &str = "Now evaluate the following dataset:";

pub const ENRICHMENT_HEADING: &str = "### Extracted Website Content for LLM Evaluation";

pub const ENRICHMENT_GROUNDING_INSTRUCTION: &str =
    "Using ONLY the extracted webpage content above and the FAIR rubric, evaluate the dataset.";

pub const CHAIN_OF_THOUGHT_INSTRUCTION: &str =
    "First, think step-by-step internally using the rubric to decide the scores.";

pub const TABLE_ONLY_INSTRUCTION: &str =
    "Then, provide ONLY the final answer as a single markdown table row in this exact format:";

pub const DIRECT_TABLE_INSTRUCTION: &str =
    "Return ONLY a single markdown table row in this exact format:";

pub const NO_COMMENTARY_INSTRUCTION: &str =
    "Replace each X with the evaluated score. Do not include any explanations, reasoning text, or additional commentary in your final output.";
