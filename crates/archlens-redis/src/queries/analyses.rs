//! Analysis queries — Redis implementation.
//!
//! Each analysis lives in the hash `archlens:analysis:{id}` under the field
//! `data`. The sorted set `archlens:analyses:all` indexes ids by write
//! sequence, taken from the counter `archlens:analyses:seq`, so records
//! written within the same instant still list in write order.

use crate::client::{RedisPool, RedisResult};
use archlens_core::analysis::model::Analysis;
use redis::AsyncCommands;
use tracing::warn;

pub const ANALYSES_INDEX_KEY: &str = "archlens:analyses:all";
pub const ANALYSES_SEQ_KEY: &str = "archlens:analyses:seq";

pub fn analysis_key(id: &str) -> String {
    format!("archlens:analysis:{}", id)
}

pub async fn save_analysis(pool: &RedisPool, analysis: &Analysis) -> RedisResult<()> {
    let mut conn = pool.clone();
    let key = analysis_key(&analysis.id);
    conn.hset::<_, _, _, ()>(&key, "data", analysis.to_json()?).await?;
    let seq: i64 = conn.incr(ANALYSES_SEQ_KEY, 1).await?;
    conn.zadd::<_, _, _, ()>(ANALYSES_INDEX_KEY, &analysis.id, seq).await?;
    Ok(())
}

pub async fn get_analysis(pool: &RedisPool, id: &str) -> RedisResult<Option<Analysis>> {
    let mut conn = pool.clone();
    let json: Option<String> = conn.hget(analysis_key(id), "data").await?;
    match json {
        Some(j) => Ok(Some(Analysis::from_json(&j)?)),
        None => Ok(None),
    }
}

/// Remove an analysis and its index entry. Returns whether the record existed.
pub async fn delete_analysis(pool: &RedisPool, id: &str) -> RedisResult<bool> {
    let mut conn = pool.clone();
    let removed: i64 = conn.del(analysis_key(id)).await?;
    conn.zrem::<_, _, ()>(ANALYSES_INDEX_KEY, id).await?;
    Ok(removed > 0)
}

/// List analyses oldest first.
pub async fn list_analyses(pool: &RedisPool) -> RedisResult<Vec<Analysis>> {
    let mut conn = pool.clone();
    let ids: Vec<String> = conn.zrange(ANALYSES_INDEX_KEY, 0, -1).await?;
    let mut analyses = Vec::with_capacity(ids.len());
    for id in ids {
        let json: Option<String> = conn.hget(analysis_key(&id), "data").await?;
        let Some(j) = json else {
            warn!(analysis_id = %id, "Index entry without analysis record");
            continue;
        };
        match Analysis::from_json(&j) {
            Ok(analysis) => analyses.push(analysis),
            Err(e) => warn!(analysis_id = %id, error = %e, "Skipping unreadable analysis"),
        }
    }
    Ok(analyses)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis_key() {
        assert_eq!(analysis_key("65f1c2"), "archlens:analysis:65f1c2");
    }
}
