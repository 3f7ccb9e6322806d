use crate::application::use_cases::classifier::{ClassifiedQueries, QueryClassifier};
use crate::application::use_cases::joiner::join_rows;
use crate::application::use_cases::normalizer::normalize_agg_filters;
use crate::application::use_cases::parser::DatasetParser;
use crate::domain::dataset::Record;
use crate::domain::error::Result;
use crate::domain::query::QueryPayload;
use crate::domain::table::JoinedRow;
use crate::infrastructure::pxweb::DatasetSource;

#[derive(Debug, Clone)]
pub struct DatasetEndpoints {
    pub population_url: String,
    pub employment_url: String,
}

/// Orchestrates the whole pipeline: normalize the raw queries, decide which
/// is which, fetch both datasets, parse them and join into table rows.
pub struct TableBuilder<'a> {
    source: &'a dyn DatasetSource,
    classifier: QueryClassifier,
    parser: DatasetParser,
    endpoints: DatasetEndpoints,
}

impl<'a> TableBuilder<'a> {
    pub fn new(
        source: &'a dyn DatasetSource,
        classifier: QueryClassifier,
        parser: DatasetParser,
        endpoints: DatasetEndpoints,
    ) -> Self {
        Self {
            source,
            classifier,
            parser,
            endpoints,
        }
    }

    /// Joint build: both fetches run concurrently and a failure in either
    /// branch fails the whole build.
    pub async fn build(&self, a: QueryPayload, b: QueryPayload) -> Result<Vec<JoinedRow>> {
        let ClassifiedQueries {
            population,
            employment,
        } = self.classify(a, b)?;

        let (population_data, employment_data) = tokio::try_join!(
            self.source
                .fetch_dataset(&self.endpoints.population_url, &population),
            self.source
                .fetch_dataset(&self.endpoints.employment_url, &employment),
        )?;

        let population_rows = self.parser.parse(&population_data)?;
        let employment_rows = self.parser.parse(&employment_data)?;
        tracing::info!(
            regions = population_rows.len(),
            matches = employment_rows.len(),
            "joining datasets"
        );
        Ok(join_rows(&population_rows, &employment_rows))
    }

    /// Two-phase build: the population fetch is fatal, the employment fetch
    /// is an enrichment whose failure only costs the extra columns. The
    /// population rows survive with absent employment values.
    pub async fn build_progressive(
        &self,
        a: QueryPayload,
        b: QueryPayload,
    ) -> Result<Vec<JoinedRow>> {
        let ClassifiedQueries {
            population,
            employment,
        } = self.classify(a, b)?;

        let population_data = self
            .source
            .fetch_dataset(&self.endpoints.population_url, &population)
            .await?;
        let population_rows = self.parser.parse(&population_data)?;

        match self.fetch_employment_rows(&employment).await {
            Ok(employment_rows) => Ok(join_rows(&population_rows, &employment_rows)),
            Err(err) => {
                tracing::warn!(error = %err, "employment enrichment failed, keeping population rows");
                Ok(join_rows(&population_rows, &[]))
            }
        }
    }

    fn classify(&self, a: QueryPayload, b: QueryPayload) -> Result<ClassifiedQueries> {
        let a = normalize_agg_filters(&a);
        let b = normalize_agg_filters(&b);
        self.classifier.classify_pair(a, b)
    }

    async fn fetch_employment_rows(&self, employment: &QueryPayload) -> Result<Vec<Record>> {
        let data = self
            .source
            .fetch_dataset(&self.endpoints.employment_url, employment)
            .await?;
        self.parser.parse(&data)
    }
}
