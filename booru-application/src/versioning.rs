//! 带版本校验的实体变更
//!
//! 流程：读取请求中的版本号 -> 与实体比对 -> 执行变更 -> 版本号加一。
//! 持久化与以上步骤需在调用方的同一个事务中完成。
//!
use crate::error::{AppError, AppResult};
use crate::params::RequestParams;
use booru_domain::entity::Entity;
use booru_domain::value_object::Version;
use booru_domain::version_guard;

/// 默认的版本号参数名
pub const VERSION_PARAM: &str = "version";

/// 读取必填的版本号参数并与实体当前版本比对
///
/// 负数无法成为版本号，按非法参数处理。
pub fn verify_version<E>(entity: &E, params: &RequestParams, field_name: &str) -> AppResult<()>
where
    E: Entity + ?Sized,
{
    let raw = params.require_param_as_int(field_name)?;
    let expected = usize::try_from(raw).map_err(|_| AppError::InvalidParameter {
        name: field_name.to_string(),
        reason: "expected a non-negative integer".to_string(),
    })?;
    version_guard::verify(entity, Version::from_value(expected))?;
    Ok(())
}

pub fn bump_version<E>(entity: &mut E)
where
    E: Entity + ?Sized,
{
    version_guard::bump(entity);
}

/// 校验版本后执行变更；仅在变更成功时递增一次版本号
pub fn update_versioned<E, T, F>(entity: &mut E, params: &RequestParams, mutate: F) -> AppResult<T>
where
    E: Entity + ?Sized,
    F: FnOnce(&mut E) -> AppResult<T>,
{
    verify_version(entity, params, VERSION_PARAM)?;
    let out = mutate(entity)?;
    bump_version(entity);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use booru_domain::user::User;

    fn user_at(version: usize) -> User {
        let mut user = User::new("u-1".into(), Version::from_value(version));
        user.name = "u1".into();
        user.rank = "regular".into();
        user
    }

    #[test]
    fn matching_version_updates_and_bumps_once() {
        let mut user = user_at(2);
        let params = RequestParams::new().with("version", 2);

        let old_rank = update_versioned(&mut user, &params, |u| {
            Ok(std::mem::replace(&mut u.rank, "power".into()))
        })
        .unwrap();

        assert_eq!(old_rank, "regular");
        assert_eq!(user.rank, "power");
        assert_eq!(user.version().value(), 3);
    }

    #[test]
    fn stale_version_is_a_conflict_and_leaves_entity_untouched() {
        let mut user = user_at(2);
        let params = RequestParams::new().with("version", 1);
        let mut called = false;

        let err = update_versioned(&mut user, &params, |u| {
            called = true;
            u.rank = "power".into();
            Ok(())
        })
        .unwrap_err();

        assert!(err.is_conflict());
        assert_eq!(err.status_code(), 409);
        assert!(!called);
        assert_eq!(user.rank, "regular");
        assert_eq!(user.version().value(), 2);
    }

    #[test]
    fn failed_mutation_does_not_bump() {
        let mut user = user_at(0);
        let params = RequestParams::new().with("version", "0");

        let err = update_versioned(&mut user, &params, |_| -> AppResult<()> {
            Err(AppError::Validation("Rank is invalid.".into()))
        })
        .unwrap_err();

        assert!(err.is_validation());
        assert_eq!(user.version().value(), 0);
    }

    #[test]
    fn version_parameter_problems_come_before_comparison() {
        let user = user_at(0);

        let err = verify_version(&user, &RequestParams::new(), VERSION_PARAM).unwrap_err();
        assert!(matches!(err, AppError::MissingParameter { .. }));

        let params = RequestParams::new().with("version", "zero");
        let err = verify_version(&user, &params, VERSION_PARAM).unwrap_err();
        assert!(matches!(err, AppError::InvalidParameter { .. }));

        let params = RequestParams::new().with("version", -1);
        let err = verify_version(&user, &params, VERSION_PARAM).unwrap_err();
        assert!(matches!(err, AppError::InvalidParameter { .. }));
    }

    #[test]
    fn custom_field_name() {
        let user = user_at(5);
        let params = RequestParams::new().with("userVersion", 5);
        assert!(verify_version(&user, &params, "userVersion").is_ok());
    }
}
