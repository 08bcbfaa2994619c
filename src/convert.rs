//! The conversion engine: one document in, one Turtle file out.
//!
//! A run loads the document into the typed model, binds the namespace
//! prefixes, invokes every per-record mapper in collection order, and
//! serializes the accumulated store. Mapper order affects emission
//! order only, never the triples' meaning. There is no incremental or
//! streaming mode; any failure aborts the whole run.

use std::collections::HashSet;
use std::path::Path;

use crate::config::ConversionConfig;
use crate::document::PackageDocument;
use crate::error::AppError;
use crate::graph::{to_turtle, TripleStore};
use crate::mappers::{agreement, assessment, budget, literature, measurement, package, pico};
use crate::resolve::Resolver;
use crate::vocab;

/// Converts the document at `input` and writes the Turtle rendering to
/// `output`. Returns the number of emitted triples.
pub fn convert_file(
    input: &Path,
    output: &Path,
    options: &ConversionConfig,
) -> Result<usize, AppError> {
    let document = PackageDocument::load(input)?;
    let resolver = Resolver::for_input_path(input);
    tracing::info!(
        "Loaded package statement document from {} ({})",
        input.display(),
        resolver.data_namespace()
    );

    let store = convert_document(&document, resolver, options)?;
    let turtle = to_turtle(&store);
    std::fs::write(output, turtle).map_err(|e| AppError::io(output, e))?;
    tracing::info!("Wrote {} triples to {}", store.len(), output.display());
    Ok(store.len())
}

/// Converts an already-loaded document into a triple store.
pub fn convert_document(
    document: &PackageDocument,
    mut resolver: Resolver,
    options: &ConversionConfig,
) -> Result<TripleStore, AppError> {
    if options.strict_references {
        check_references(document)?;
    }

    let mut store = TripleStore::new();
    for (prefix, namespace) in vocab::standard_bindings() {
        store.bind(prefix, namespace);
    }
    store.bind("data", resolver.data_namespace());

    store.extend(package::organization_triples(&resolver));
    store.extend(package::map_package_statement(
        &document.package_statement,
        &mut resolver,
    )?);
    for population in &document.populations {
        store.extend(pico::map_population(population, &mut resolver)?);
    }
    for intervention in &document.interventions {
        store.extend(pico::map_intervention(intervention, &mut resolver)?);
    }
    for group in &document.intervention_groups {
        store.extend(pico::map_intervention_group(group, &mut resolver)?);
    }
    for outcome in &document.outcomes {
        store.extend(pico::map_outcome(outcome, &mut resolver)?);
    }
    for group in &document.outcome_groups {
        store.extend(pico::map_outcome_group(group, &mut resolver)?);
    }
    for picots in &document.picots {
        store.extend(pico::map_picots(picots, &mut resolver)?);
    }
    tracing::debug!("Mapped PICO sections ({} triples so far)", store.len());

    for iic in &document.iic_assessments {
        store.extend(assessment::map_iic_assessment(iic, &mut resolver)?);
    }
    for emsmp in &document.emsmps {
        store.extend(assessment::map_emsmp(emsmp, &mut resolver)?);
    }
    for review in &document.systematic_literature_reviews {
        store.extend(literature::map_systematic_literature_review(review, &mut resolver)?);
    }
    for search in &document.literature_searches {
        store.extend(literature::map_literature_search(search, &mut resolver)?);
    }
    for publication in &document.publications {
        store.extend(literature::map_publication(publication, &mut resolver)?);
    }
    for list in &document.literature_reference_lists {
        store.extend(literature::map_literature_reference_list(list, &mut resolver)?);
    }
    for study in &document.studies {
        store.extend(literature::map_study(study, &mut resolver)?);
    }
    for cohort in &document.cohorts {
        store.extend(literature::map_cohort(cohort, &mut resolver)?);
    }
    for measurement in &document.outcome_measurements {
        store.extend(measurement::map_outcome_measurement(measurement, &mut resolver)?);
    }
    tracing::debug!("Mapped evidence sections ({} triples so far)", store.len());

    for trend in &document.trend_assumptions {
        store.extend(budget::map_trend_assumption(trend, &mut resolver)?);
    }
    for scenario in &document.scenarios {
        store.extend(budget::map_scenario(scenario, &mut resolver)?);
    }
    for estimation in &document.cost_estimations {
        store.extend(budget::map_cost_estimation(estimation, &mut resolver)?);
    }
    for bia in &document.bias {
        store.extend(budget::map_bia(bia, &mut resolver)?);
    }
    if let Some(agreement_record) = &document.appropriate_use {
        store.extend(agreement::map_appropriate_use(
            agreement_record,
            &mut resolver,
            &options.agreement_language,
        )?);
    }

    tracing::debug!("Conversion complete: {} triples", store.len());
    Ok(store)
}

/// Strict-mode integrity pass: every record id must be unique, and
/// every cross-record reference must name a declared id. Synthesized
/// dataset identifiers are covered through the trend assumption and
/// cost estimation ids they are derived from.
fn check_references(document: &PackageDocument) -> Result<(), AppError> {
    fn declare<'a>(declared: &mut HashSet<&'a str>, id: &'a str) -> Result<(), AppError> {
        if !declared.insert(id) {
            return Err(AppError::DuplicateId(id.to_string()));
        }
        Ok(())
    }

    let mut declared: HashSet<&str> = HashSet::new();
    declare(&mut declared, &document.package_statement.id)?;
    for r in &document.populations {
        declare(&mut declared, &r.id)?;
    }
    for r in &document.interventions {
        declare(&mut declared, &r.id)?;
    }
    for r in &document.intervention_groups {
        declare(&mut declared, &r.id)?;
    }
    for r in &document.outcomes {
        declare(&mut declared, &r.id)?;
    }
    for r in &document.outcome_groups {
        declare(&mut declared, &r.id)?;
    }
    for r in &document.picots {
        declare(&mut declared, &r.id)?;
    }
    for r in &document.iic_assessments {
        declare(&mut declared, &r.id)?;
    }
    for r in &document.emsmps {
        declare(&mut declared, &r.id)?;
    }
    for r in &document.systematic_literature_reviews {
        declare(&mut declared, &r.id)?;
    }
    for r in &document.literature_searches {
        declare(&mut declared, &r.id)?;
    }
    for r in &document.publications {
        declare(&mut declared, &r.id)?;
    }
    for r in &document.literature_reference_lists {
        declare(&mut declared, &r.id)?;
    }
    for r in &document.studies {
        declare(&mut declared, &r.id)?;
    }
    for r in &document.cohorts {
        declare(&mut declared, &r.id)?;
    }
    for r in &document.outcome_measurements {
        declare(&mut declared, &r.id)?;
    }
    for r in &document.trend_assumptions {
        declare(&mut declared, &r.id)?;
    }
    for r in &document.scenarios {
        declare(&mut declared, &r.id)?;
    }
    for r in &document.cost_estimations {
        declare(&mut declared, &r.id)?;
    }
    for r in &document.bias {
        declare(&mut declared, &r.id)?;
    }
    if let Some(r) = &document.appropriate_use {
        declare(&mut declared, &r.id)?;
    }

    let check = |id: &str, from: String| -> Result<(), AppError> {
        if declared.contains(id) {
            Ok(())
        } else {
            Err(AppError::DanglingReference {
                id: id.to_string(),
                referenced_from: from,
            })
        }
    };

    let package = &document.package_statement;
    for id in &package.iic_assessments {
        check(id, format!("package statement '{}'", package.id))?;
    }
    for r in &document.interventions {
        for id in &r.child_interventions {
            check(id, format!("intervention '{}'", r.id))?;
        }
    }
    for r in &document.intervention_groups {
        for id in &r.intervention_ids {
            check(id, format!("intervention group '{}'", r.id))?;
        }
    }
    for r in &document.outcome_groups {
        for id in &r.outcome_ids {
            check(id, format!("outcome group '{}'", r.id))?;
        }
    }
    for r in &document.picots {
        let from = || format!("picots '{}'", r.id);
        for id in &r.population_ids {
            check(id, from())?;
        }
        check(&r.intervention_group_id, from())?;
        check(&r.comparator_group_id, from())?;
        for id in &r.outcome_group_ids {
            check(id, from())?;
        }
    }
    for r in &document.iic_assessments {
        let from = || format!("IIC assessment '{}'", r.id);
        check(&r.intervention_id, from())?;
        for id in &r.indication_ids {
            check(id, from())?;
        }
        check(&r.emsmp_id, from())?;
        check(&r.bia_id, from())?;
    }
    for r in &document.emsmps {
        let from = || format!("EMSMP '{}'", r.id);
        check(&r.picots_id, from())?;
        check(&r.slr_id, from())?;
        for id in &r.outcome_measurement_ids {
            check(id, from())?;
        }
    }
    for r in &document.systematic_literature_reviews {
        let from = || format!("systematic literature review '{}'", r.id);
        for id in &r.literature_searches {
            check(id, from())?;
        }
        check(&r.literature_reference_list, from())?;
    }
    for r in &document.literature_reference_lists {
        for id in &r.references {
            check(id, format!("literature reference list '{}'", r.id))?;
        }
    }
    for r in &document.studies {
        for id in &r.literature_reference_list_ids {
            check(id, format!("study '{}'", r.id))?;
        }
    }
    for r in &document.cohorts {
        let from = || format!("cohort '{}'", r.id);
        check(&r.study_id, from())?;
        check(&r.intervention_group_id, from())?;
    }
    for r in &document.outcome_measurements {
        let from = || format!("outcome measurement '{}'", r.id);
        for id in &r.cohort_ids {
            check(id, from())?;
        }
        check(&r.outcome_id, from())?;
    }
    for r in &document.trend_assumptions {
        check(&r.scenario_id, format!("trend assumption '{}'", r.id))?;
    }
    for r in &document.cost_estimations {
        let from = || format!("cost estimation '{}'", r.id);
        check(&r.scenario_id, from())?;
        check(&r.trend_assumption_id, from())?;
        for group in &r.observation_groups {
            for id in &group.intervention_ids {
                check(id, from())?;
            }
        }
    }
    for r in &document.bias {
        let from = || format!("BIA '{}'", r.id);
        check(&r.trend_assumption_id, from())?;
        for id in &r.cost_estimation_ids {
            check(id, from())?;
        }
    }

    Ok(())
}
