use crate::core::engine::{rank_by, share_with_others, ShareEntry};
use crate::core::Result;
use crate::modules::regions::models::RegionRevenue;
use crate::modules::regions::repositories::RegionRepository;

/// Service producing the per-region revenue reports
pub struct RegionService<R: RegionRepository> {
    repo: R,
}

impl<R: RegionRepository> RegionService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub async fn top_regions(&self, limit: usize) -> Result<Vec<RegionRevenue>> {
        let regions = self.repo.fetch_all().await?;
        Ok(rank_by(&regions, |r| r.revenue, limit))
    }

    pub async fn revenue_share(&self, limit: usize) -> Result<Vec<ShareEntry>> {
        let regions = self.repo.fetch_all().await?;
        Ok(share_with_others(
            &regions,
            |r| r.revenue,
            |r| r.region.as_str(),
            limit,
        ))
    }
}
