use chrono::Utc;
use sea_orm::{ActiveModelTrait, ConnectionTrait, DbErr, Set};
use tracing::info;

use super::entity::{team, user_team};

pub struct TeamService;

impl TeamService {
    /// 새 팀을 만들고 생성자를 팀에 연결합니다.
    ///
    /// 회고 생성 트랜잭션 안에서 호출되므로 커넥션을 받아서 사용합니다.
    pub async fn create_team_with_user<C>(db: &C, user_id: i64) -> Result<team::Model, DbErr>
    where
        C: ConnectionTrait,
    {
        let now = Utc::now().naive_utc();

        let team = team::ActiveModel {
            created_at: Set(now),
            ..Default::default()
        }
        .insert(db)
        .await?;

        user_team::ActiveModel {
            user_id: Set(user_id),
            team_id: Set(team.team_id),
            created_at: Set(now),
            ..Default::default()
        }
        .insert(db)
        .await?;

        info!(team_id = team.team_id, user_id = user_id, "팀 생성 완료");

        Ok(team)
    }
}
