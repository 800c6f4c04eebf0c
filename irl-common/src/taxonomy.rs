//! Static taxonomy reference data
//!
//! The fixed three-level tree scoping feedback: Method Category → Parent
//! Attribute → child attributes, each leaf carrying a description and a
//! scoring-scale string. Loaded once, read-only; the core never mutates it.
//!
//! Section keys for the Child Attributes step join labels with
//! [`SECTION_DELIMITER`], so no label anywhere in this tree may contain that
//! sequence. [`verify_labels`] enforces this at startup instead of assuming
//! it by construction.

use crate::section::SECTION_DELIMITER;
use crate::{Error, Result};
use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;

/// One leaf of the taxonomy tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChildAttribute {
    pub name: &'static str,
    pub description: &'static str,
    pub scoring_scale: &'static str,
}

/// The five method categories, in presentation order.
pub const METHOD_CATEGORIES: [&str; 5] = [
    "Simulations",
    "Modeling",
    "Characterization",
    "Testing",
    "Assessment",
];

/// The five parent attributes, in presentation order.
pub const PARENT_ATTRIBUTES: [&str; 5] = [
    "Maturity",
    "Resource Requirements",
    "Interoperability",
    "Integration Complexity",
    "Utility",
];

const fn attr(
    name: &'static str,
    description: &'static str,
    scoring_scale: &'static str,
) -> ChildAttribute {
    ChildAttribute {
        name,
        description,
        scoring_scale,
    }
}

/// Child attributes per (category, parent attribute) pair.
static CHILD_ATTRIBUTES: Lazy<HashMap<(&'static str, &'static str), Vec<ChildAttribute>>> =
    Lazy::new(|| {
        let mut map: HashMap<(&'static str, &'static str), Vec<ChildAttribute>> = HashMap::new();

        // Simulations
        map.insert(
            ("Simulations", "Maturity"),
            vec![
                attr(
                    "Validation Level",
                    "How thoroughly the simulation method is validated against experimental or benchmark data.",
                    "1=No validation; 5=Some; 9=Extensively validated",
                ),
                attr(
                    "Numerical Stability",
                    "Frequency of solver crashes, convergence issues, or non-physical results.",
                    "1=Frequent instabilities; 5=Occasional issues; 9=Very stable",
                ),
                attr(
                    "Method Standardization",
                    "Degree of standardized protocols, best practices, and accepted formats.",
                    "1=Ad-hoc; 5=Some guidelines; 9=Fully standardized",
                ),
            ],
        );
        map.insert(
            ("Simulations", "Resource Requirements"),
            vec![
                attr(
                    "Licensing Costs",
                    "Financial cost of simulation software licenses.",
                    "1=Very expensive; 5=Moderate; 9=Open-source/free",
                ),
                attr(
                    "Computational Demand",
                    "CPU/GPU hours, memory requirements, runtime.",
                    "1=Requires HPC/very long runs; 5=Overnight; 9=Minimal footprint",
                ),
                attr(
                    "Training Load",
                    "Expertise and time required to learn and operate the simulation method.",
                    "1=Highly specialized; 5=Graduate-level skill; 9=Intuitive/minimal training",
                ),
            ],
        );
        map.insert(
            ("Simulations", "Interoperability"),
            vec![
                attr(
                    "Data Format Compatibility",
                    "Ability to import/export data in standard formats (e.g., EC-lab, netCDF).",
                    "1=Proprietary only; 5=Partial; 9=Fully open",
                ),
                attr(
                    "Platform Independence",
                    "Ability to run on various OS/HPC environments.",
                    "1=Single OS; 5=Multi-OS with tweaks; 9=Fully cross-platform",
                ),
                attr(
                    "API/Scripting Availability",
                    "Availability of APIs or scripting interfaces for customization.",
                    "1=No API; 5=Limited; 9=Extensive APIs",
                ),
            ],
        );
        map.insert(
            ("Simulations", "Integration Complexity"),
            vec![
                attr(
                    "Pre-processing Time",
                    "Time/effort to set up geometry, boundary conditions, and meshing.",
                    "1=Days; 5=Hours; 9=Automated in minutes",
                ),
                attr(
                    "Post-processing Tools",
                    "Quality and user-friendliness of visualization and analysis tools.",
                    "1=Complex external steps; 5=Basic tools; 9=Advanced & automated",
                ),
                attr(
                    "Parameter Sensitivity & UQ Modules",
                    "Ease of performing uncertainty quantification and parameter sweeps.",
                    "1=Manual/tedious; 5=Some scripting; 9=Fully integrated",
                ),
            ],
        );
        map.insert(
            ("Simulations", "Utility"),
            vec![
                attr(
                    "Predictive Value",
                    "How beneficial are the simulation outputs for hydrogen R&D or industrial workflows?",
                    "1=Minimal impact; 5=Moderate; 9=Transformative",
                ),
                attr(
                    "Industry Alignment",
                    "Relevance to IEC/ISO, DoE references, HPC usage optimizations.",
                    "1=Low relevance; 5=Medium; 9=Fully aligned & strategic",
                ),
            ],
        );

        // Modeling
        map.insert(
            ("Modeling", "Maturity"),
            vec![
                attr(
                    "Theoretical Foundation Robustness",
                    "How well-accepted the theoretical underpinnings are.",
                    "1=Speculative; 5=Moderately accepted; 9=Widely accepted",
                ),
                attr(
                    "Code Base Stability",
                    "Frequency and magnitude of model code revisions.",
                    "1=Constant major changes; 5=Occasional updates; 9=Very stable",
                ),
                attr(
                    "Parameter Validation",
                    "Level of parameter fitting and validation against data.",
                    "1=Poorly validated; 5=Some; 9=Thoroughly validated",
                ),
            ],
        );
        map.insert(
            ("Modeling", "Resource Requirements"),
            vec![
                attr(
                    "Software Cost",
                    "Licensing or acquisition cost of modeling tools.",
                    "1=Very expensive; 5=Moderate/partial OS; 9=Open-source/free",
                ),
                attr(
                    "Computational Efficiency",
                    "Runtime and resource usage for solving or parameter estimation.",
                    "1=Days/run; 5=Hours/run; 9=Minutes or less",
                ),
                attr(
                    "Maintenance Overhead",
                    "Effort to keep the model updated and functional.",
                    "1=Frequent recalibration; 5=Occasional updates; 9=Low maintenance",
                ),
            ],
        );
        map.insert(
            ("Modeling", "Interoperability"),
            vec![
                attr(
                    "Input Data Format Compatibility",
                    "Ability to use standard data sets or link with experimental databases.",
                    "1=Proprietary only; 5=Some standard imports; 9=Fully flexible",
                ),
                attr(
                    "Model Coupling Capability",
                    "Ease of linking this model to other models.",
                    "1=Standalone; 5=Partial bridging; 9=Fully modular",
                ),
                attr(
                    "Documentation & Standards",
                    "Quality of documentation and adherence to modeling standards.",
                    "1=Poor docs; 5=Basic; 9=Comprehensive/standardized",
                ),
            ],
        );
        map.insert(
            ("Modeling", "Integration Complexity"),
            vec![
                attr(
                    "Implementation Complexity",
                    "Difficulty integrating the model into existing workflows.",
                    "1=Very difficult; 5=Moderate; 9=Plug-and-play",
                ),
                attr(
                    "Sensitivity Analysis Tools",
                    "Built-in parameter sensitivity and uncertainty routines.",
                    "1=None; 5=Limited; 9=Robust integrated features",
                ),
                attr(
                    "Scalability",
                    "Ability to scale from component-level to system-level modeling.",
                    "1=Restricted; 5=Some scaling; 9=Easily scalable",
                ),
            ],
        );
        map.insert(
            ("Modeling", "Utility"),
            vec![
                attr(
                    "Predictive Accuracy vs. Project Goals",
                    "Does the model significantly improve decision-making or project KPIs?",
                    "1=Marginal; 5=Useful; 9=Highly impactful",
                ),
                attr(
                    "Adoption Potential",
                    "Likelihood that others in the consortium or industry adopt it once integrated.",
                    "1=Unlikely; 5=Moderate; 9=Very likely",
                ),
            ],
        );

        // Characterization
        map.insert(
            ("Characterization", "Maturity"),
            vec![
                attr(
                    "Resolution & Sensitivity",
                    "Smallest distinguishable feature or analyte quantity.",
                    "1=Low res; 5=Moderate; 9=High-resolution",
                ),
                attr(
                    "Reproducibility",
                    "Consistency of results under identical conditions.",
                    "1=Highly variable; 5=Some variability; 9=Highly reproducible",
                ),
                attr(
                    "Standard Protocol Acceptance",
                    "Adoption of widely recognized characterization protocols.",
                    "1=None; 5=Some guidelines; 9=Industry-level standards",
                ),
            ],
        );
        map.insert(
            ("Characterization", "Resource Requirements"),
            vec![
                attr(
                    "Equipment Investment",
                    "Capital cost of required instrumentation.",
                    "1=>€200k; 5=€50k–200k; 9=<€10k",
                ),
                attr(
                    "Consumable Usage",
                    "Cost/frequency of consumables per measurement.",
                    "1=High cost; 5=Moderate; 9=Minimal",
                ),
                attr(
                    "Labor Intensity",
                    "Personnel time required per sample.",
                    "1=Hours; 5=~1 hour; 9=Minutes",
                ),
            ],
        );
        map.insert(
            ("Characterization", "Interoperability"),
            vec![
                attr(
                    "Hardware Compatibility",
                    "Ability to fit into standard sample holders or test cells.",
                    "1=Custom only; 5=Adapter needed; 9=Standard holders",
                ),
                attr(
                    "Data Format Standardization",
                    "Output in known, open data formats.",
                    "1=Proprietary only; 5=Limited; 9=Open formats",
                ),
                attr(
                    "Calibration Transferability",
                    "Ease of applying same calibration across instruments.",
                    "1=Unique per setup; 5=Transferable w/adjustments; 9=Easily transferable",
                ),
            ],
        );
        map.insert(
            ("Characterization", "Integration Complexity"),
            vec![
                attr(
                    "Setup Time",
                    "Time required to prepare and align instrument/sample.",
                    "1=Hours; 5=Tens of minutes; 9=Minutes",
                ),
                attr(
                    "Data Processing Complexity",
                    "Difficulty converting raw data into metrics.",
                    "1=Complex multi-step; 5=Some manual steps; 9=Fully automated",
                ),
                attr(
                    "Detection Limit",
                    "Lowest detectable quantity.",
                    "1=High limit; 5=Moderate; 9=Very low limit",
                ),
            ],
        );
        map.insert(
            ("Characterization", "Utility"),
            vec![
                attr(
                    "Impact on Project KPIs",
                    "Degree to which characterization results drive design improvements.",
                    "1=Marginal; 5=Moderate; 9=Key enabler",
                ),
                attr(
                    "Standardization Value",
                    "Adds crucial standardized data for collaborative projects or regulatory approvals.",
                    "1=Low; 5=Moderate; 9=High synergy",
                ),
            ],
        );

        // Testing
        map.insert(
            ("Testing", "Maturity"),
            vec![
                attr(
                    "Test Protocol Stability",
                    "Frequency of major changes to test procedures.",
                    "1=Evolving; 5=Mostly stable; 9=Fully standardized",
                ),
                attr(
                    "Reliability Under Varied Conditions",
                    "Consistency of results across different operating conditions.",
                    "1=Wide variance; 5=Some; 9=Robust",
                ),
                attr(
                    "Reference to Industry Standards",
                    "Alignment with recognized test standards.",
                    "1=None; 5=Partial; 9=Fully aligned",
                ),
            ],
        );
        map.insert(
            ("Testing", "Resource Requirements"),
            vec![
                attr(
                    "Equipment Depreciation Rate",
                    "Annual loss in equipment value.",
                    "1=High; 5=Moderate; 9=Low depreciation",
                ),
                attr(
                    "Test Duration per Sample",
                    "Length of each test cycle.",
                    "1=Days; 5=Hours; 9=Minutes",
                ),
                attr(
                    "Energy Consumption per Cycle",
                    "Energy used per test run.",
                    "1=Very high; 5=Moderate; 9=Very low",
                ),
            ],
        );
        map.insert(
            ("Testing", "Interoperability"),
            vec![
                attr(
                    "Universality of Fixtures",
                    "Ability to use standard fixtures for different sample types.",
                    "1=Specialized; 5=Adapters needed; 9=Universal",
                ),
                attr(
                    "Software Integration Level",
                    "Ease of linking test control/data acquisition with lab software.",
                    "1=Manual; 5=Partial integration; 9=Fully automated",
                ),
                attr(
                    "Reporting Standardization",
                    "Ability to produce results in standard reporting formats.",
                    "1=Proprietary; 5=Limited; 9=Fully compliant",
                ),
            ],
        );
        map.insert(
            ("Testing", "Integration Complexity"),
            vec![
                attr(
                    "Setup Time",
                    "Time to install and calibrate the test sample.",
                    "1=Hours; 5=Tens of minutes; 9=Minutes",
                ),
                attr(
                    "Range of Test Conditions",
                    "Diversity of conditions achievable (e.g., temperature, pressure).",
                    "1=Very narrow; 5=Moderate; 9=Wide range",
                ),
                attr(
                    "Fault Diagnosis Tools",
                    "Ability to detect/diagnose anomalies in real-time.",
                    "1=None; 5=Basic alarms; 9=Advanced diagnostics",
                ),
            ],
        );
        map.insert(
            ("Testing", "Utility"),
            vec![
                attr(
                    "Relevance to Performance Validation",
                    "Ensures direct feedback on device or material performance for project goals.",
                    "1=Low; 5=Medium; 9=High synergy",
                ),
                attr(
                    "Data Quality for Scale-up",
                    "Usefulness of test data for scaling to pilot or commercial applications.",
                    "1=Marginal; 5=Moderate; 9=Essential",
                ),
            ],
        );

        // Assessment
        map.insert(
            ("Assessment", "Maturity"),
            vec![
                attr(
                    "Methodological Consensus",
                    "Level of standardization and consensus.",
                    "1=None; 5=Some guidance; 9=Fully standardized",
                ),
                attr(
                    "Data Quality Requirements",
                    "Clarity and standardization of data quality metrics.",
                    "1=Poorly defined; 5=Some guidelines; 9=Well-defined",
                ),
                attr(
                    "Update Frequency",
                    "Frequency of major methodological changes.",
                    "1=Frequent; 5=Occasional; 9=Very stable",
                ),
            ],
        );
        map.insert(
            ("Assessment", "Resource Requirements"),
            vec![
                attr(
                    "Software/Database Licensing",
                    "Cost of analysis tools and databases.",
                    "1=Very expensive; 5=Moderate; 9=Free/open-source",
                ),
                attr(
                    "Data Acquisition Costs",
                    "Effort/expense to gather input data.",
                    "1=Very difficult; 5=Moderate; 9=Easily accessible",
                ),
                attr(
                    "Analyst Training",
                    "Complexity of training required.",
                    "1=Specialized experts; 5=Skilled professionals; 9=Minimal training",
                ),
            ],
        );
        map.insert(
            ("Assessment", "Interoperability"),
            vec![
                attr(
                    "Compatibility with Other Frameworks",
                    "Integration with other sustainability/economic frameworks.",
                    "1=Very specialized; 5=Limited; 9=Broad compatibility",
                ),
                attr(
                    "Database Integration",
                    "Ease of importing standard LCI or other datasets.",
                    "1=None; 5=Some parsing; 9=Direct compatibility",
                ),
                attr(
                    "Reporting Standards",
                    "Compliance with recognized reporting frameworks (e.g., ISO).",
                    "1=Proprietary; 5=Partial; 9=Fully compliant",
                ),
            ],
        );
        map.insert(
            ("Assessment", "Integration Complexity"),
            vec![
                attr(
                    "Time to Results",
                    "Speed from input to final assessment.",
                    "1=Weeks; 5=Days; 9=Hours or less",
                ),
                attr(
                    "Sensitivity/Scenario Analysis Capability",
                    "Built-in scenario/uncertainty tools.",
                    "1=None; 5=Manual; 9=Fully integrated",
                ),
                attr(
                    "Scalability Across Systems",
                    "Suitability from component-level to full supply chain.",
                    "1=Component-only; 5=Some scaling; 9=Easily scalable",
                ),
            ],
        );
        map.insert(
            ("Assessment", "Utility"),
            vec![
                attr(
                    "Decision-Making Impact",
                    "Does the assessment clearly guide strategic decisions or design changes?",
                    "1=Minimal; 5=Some; 9=High impact",
                ),
                attr(
                    "Regulatory/Compliance Value",
                    "Helps meet regulations, certifications, or official guidelines.",
                    "1=Little relevance; 5=Useful; 9=Essential",
                ),
            ],
        );

        map
    });

/// Child attributes for a (category, parent attribute) pair.
///
/// Returns an empty slice for undefined pairs; the caller substitutes the
/// "General" sentinel, this is never an error.
pub fn child_attributes(category: &str, parent: &str) -> &'static [ChildAttribute] {
    CHILD_ATTRIBUTES
        .iter()
        .find(|((c, p), _)| *c == category && *p == parent)
        .map(|(_, v)| v.as_slice())
        .unwrap_or(&[])
}

/// Look up one child attribute by name under a (category, parent) pair.
pub fn find_child_attribute(
    category: &str,
    parent: &str,
    name: &str,
) -> Option<&'static ChildAttribute> {
    child_attributes(category, parent)
        .iter()
        .find(|a| a.name == name)
}

/// Check every label in the taxonomy against the section-key delimiter.
///
/// Composite section keys are only collision-free if no category, parent
/// attribute, or child attribute name contains the delimiter. Run once at
/// startup; a failure here is a data bug, not a runtime condition.
pub fn verify_labels() -> Result<()> {
    let offending = |label: &str| label.contains(SECTION_DELIMITER);

    for category in METHOD_CATEGORIES {
        if offending(category) {
            return Err(Error::Config(format!(
                "taxonomy category {category:?} contains the section delimiter"
            )));
        }
    }
    for parent in PARENT_ATTRIBUTES {
        if offending(parent) {
            return Err(Error::Config(format!(
                "taxonomy parent attribute {parent:?} contains the section delimiter"
            )));
        }
    }
    for ((category, parent), children) in CHILD_ATTRIBUTES.iter() {
        for child in children {
            if offending(child.name) {
                return Err(Error::Config(format!(
                    "child attribute {:?} under {category}/{parent} contains the section delimiter",
                    child.name
                )));
            }
        }
    }
    Ok(())
}
