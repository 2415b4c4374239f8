// ABOUTME: Shared test helpers for the engine integration tests
// ABOUTME: Row/discipline builders and in-process fakes for both remote sources
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Track Insights

#![allow(dead_code)]

use async_trait::async_trait;

use bestlist_engine::errors::{EngineError, EngineResult};
use bestlist_engine::external::{DisciplineSource, ResultsSource};
use bestlist_engine::models::{
    AthleteInformation, BestlistQuery, BestlistResponse, BestlistRow, ClubInformation,
    ConfigurationInformation, DisciplineDescriptor, DisciplineQuery, DisciplineType,
    EventInformation, ResultInformation,
};

/// Discipline descriptor with the given capabilities
pub fn discipline(
    id: i64,
    name: &str,
    score_available: bool,
    wind_relevant: bool,
) -> DisciplineDescriptor {
    DisciplineDescriptor {
        id,
        name: name.to_owned(),
        score_available,
        wind_relevant,
    }
}

/// A bestlist row whose only meaningful field is the performance
pub fn row(performance: i64) -> BestlistRow {
    BestlistRow {
        athlete: AthleteInformation {
            id: 1,
            name: "Test Athlete".to_owned(),
            nationality: "SUI".to_owned(),
            birthdate: "2000-01-01".to_owned(),
        },
        club: ClubInformation {
            id: 1,
            name: "Test Club".to_owned(),
        },
        event: EventInformation {
            id: 1,
            name: "Test Meeting".to_owned(),
        },
        result: ResultInformation {
            performance,
            wind: None,
            rank: "1.".to_owned(),
            location: "Bern".to_owned(),
            date: "2024-06-01".to_owned(),
            homologated: true,
            points: 900,
        },
    }
}

/// A bestlist response carrying one row per performance, in order
pub fn response(performances: &[i64]) -> BestlistResponse {
    BestlistResponse {
        configuration: ConfigurationInformation {
            wind_relevant: true,
            homologation_relevant: true,
            score_available: true,
            discipline_type: DisciplineType::ShortTrack,
        },
        results: performances.iter().copied().map(row).collect(),
    }
}

/// Discipline source answering every request with the same list
pub struct StaticDisciplines(pub Vec<DisciplineDescriptor>);

#[async_trait]
impl DisciplineSource for StaticDisciplines {
    async fn fetch_disciplines(
        &self,
        _query: &DisciplineQuery,
    ) -> EngineResult<Vec<DisciplineDescriptor>> {
        Ok(self.0.clone())
    }
}

/// Discipline source that always fails
pub struct FailingDisciplines;

#[async_trait]
impl DisciplineSource for FailingDisciplines {
    async fn fetch_disciplines(
        &self,
        _query: &DisciplineQuery,
    ) -> EngineResult<Vec<DisciplineDescriptor>> {
        Err(EngineError::fetch("disciplines", "HTTP 502: bad gateway"))
    }
}

/// Results source answering every request with the same response
pub struct StaticResults(pub BestlistResponse);

#[async_trait]
impl ResultsSource for StaticResults {
    async fn fetch_bestlist(&self, _query: &BestlistQuery) -> EngineResult<BestlistResponse> {
        Ok(self.0.clone())
    }
}

/// Results source that always fails
pub struct FailingResults;

#[async_trait]
impl ResultsSource for FailingResults {
    async fn fetch_bestlist(&self, _query: &BestlistQuery) -> EngineResult<BestlistResponse> {
        Err(EngineError::fetch("bestlist", "HTTP 502: bad gateway"))
    }
}
