//! 乐观并发控制（Optimistic Concurrency Control）
//!
//! 每个可变实体携带一个整数版本号。调用方在修改前提交其最后观察到的版本号：
//! - `verify` 只做比对，不修改实体；
//! - `bump` 是唯一会修改版本号的操作，应在一次成功的 `verify` 与变更之后调用一次。
//!
//! 校验、变更、递增与持久化需要由调用方包裹在同一个存储事务中，
//! 否则校验与递增之间仍存在丢失更新的窗口。
//!
use crate::entity::Entity;
use crate::error::{DomainError, DomainResult};
use crate::value_object::Version;
use tracing::{debug, warn};

/// 校验调用方提交的版本号与实体当前版本号一致
pub fn verify<E>(entity: &E, expected: Version) -> DomainResult<()>
where
    E: Entity + ?Sized,
{
    let actual = entity.version();
    if expected != actual {
        warn!(
            entity_id = %entity.id(),
            expected = %expected,
            actual = %actual,
            "version conflict"
        );
        return Err(DomainError::VersionConflict { expected, actual });
    }
    Ok(())
}

/// 版本号加一（不做任何前置校验）
pub fn bump<E>(entity: &mut E)
where
    E: Entity + ?Sized,
{
    let next = entity.version().next();
    debug!(entity_id = %entity.id(), version = %next, "version bumped");
    entity.set_version(next);
}
