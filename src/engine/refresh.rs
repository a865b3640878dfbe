// ==========================================
// 珠宝生产流水线工作台 - 看板刷新服务
// ==========================================
// 职责: 整表重建看板, 并保证"后发请求取代先发请求"
// 设计: 每次刷新领取单调递增的 epoch 并广播到 watch 通道;
//       数据加载 future 与 epoch 变更 select, 被取代时
//       future 直接被丢弃（取消）, 调用方收到 Superseded。
//       原型的定时器竞态（last-writer-wins 脏提交）由此消除。
// 锁律: board 互斥锁只做短临界区提交, 绝不跨 await 持有
// ==========================================

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use chrono::{NaiveDate, Utc};
use thiserror::Error;
use tokio::sync::watch;
use uuid::Uuid;

use crate::domain::board::{DateRange, PipelineBoard};
use crate::domain::stage::StageKey;
use crate::perf::PerfGuard;

use super::provider::StageDataProvider;

// ==========================================
// 刷新错误
// ==========================================
#[derive(Error, Debug)]
pub enum RefreshError {
    /// 本次刷新被更新的请求取代（非致命, 调用方可忽略）
    #[error("刷新已被更新的请求取代")]
    Superseded,

    #[error("阶段数据加载失败: {0}")]
    Provider(#[from] anyhow::Error),

    #[error("刷新服务内部错误: {0}")]
    Internal(String),
}

// ==========================================
// BoardRefreshService - 看板刷新服务
// ==========================================
pub struct BoardRefreshService {
    provider: Arc<dyn StageDataProvider>,

    /// 当前有效 epoch 的广播端
    epoch_tx: watch::Sender<u64>,

    /// epoch 发号器（单调递增）
    next_epoch: AtomicU64,

    /// 最近一次成功提交的看板
    board: Mutex<Option<Arc<PipelineBoard>>>,
}

impl BoardRefreshService {
    pub fn new(provider: Arc<dyn StageDataProvider>) -> Self {
        let (epoch_tx, _) = watch::channel(0u64);
        Self {
            provider,
            epoch_tx,
            next_epoch: AtomicU64::new(0),
            board: Mutex::new(None),
        }
    }

    /// 整表刷新
    ///
    /// 后发调用会立即取代在途调用: 在途的加载 future 在下一个
    /// 取消点被丢弃, 其调用方收到 `RefreshError::Superseded`;
    /// 提交前再次校验 epoch, 过期刷新永远不会覆盖更新的看板
    pub async fn refresh(
        &self,
        stages: Vec<StageKey>,
        range: Option<DateRange>,
        today: NaiveDate,
    ) -> Result<Arc<PipelineBoard>, RefreshError> {
        let _perf = PerfGuard::new("board_refresh");

        // 领取 epoch 并广播, 在途的旧刷新由此被取代
        let my_epoch = self.next_epoch.fetch_add(1, Ordering::SeqCst) + 1;
        self.epoch_tx.send_replace(my_epoch);
        let epoch_rx = self.epoch_tx.subscribe();

        tracing::debug!(epoch = my_epoch, stages = stages.len(), "开始看板刷新");

        let lanes = tokio::select! {
            result = self.provider.load_board(&stages, range.as_ref(), today) => result?,
            _ = superseded(epoch_rx, my_epoch) => {
                tracing::info!(epoch = my_epoch, "刷新被取代, 加载已取消");
                return Err(RefreshError::Superseded);
            }
        };

        // 提交: 短临界区内复核 epoch, 防止过期覆盖
        let board = Arc::new(PipelineBoard {
            refresh_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            range,
            lanes,
        });

        {
            let mut guard = self
                .board
                .lock()
                .map_err(|e| RefreshError::Internal(format!("看板锁获取失败: {}", e)))?;
            if *self.epoch_tx.borrow() != my_epoch {
                tracing::info!(epoch = my_epoch, "刷新被取代, 放弃提交");
                return Err(RefreshError::Superseded);
            }
            *guard = Some(board.clone());
        }

        tracing::info!(
            epoch = my_epoch,
            refresh_id = %board.refresh_id,
            items = board.total_items(),
            "看板刷新完成"
        );
        Ok(board)
    }

    /// 最近一次成功提交的看板
    pub fn current_board(&self) -> Result<Option<Arc<PipelineBoard>>, RefreshError> {
        self.board
            .lock()
            .map(|guard| guard.clone())
            .map_err(|e| RefreshError::Internal(format!("看板锁获取失败: {}", e)))
    }
}

/// 等待 epoch 偏离 `my_epoch`（即出现更新的刷新请求）
async fn superseded(mut rx: watch::Receiver<u64>, my_epoch: u64) {
    loop {
        if *rx.borrow_and_update() != my_epoch {
            return;
        }
        // 发送端归服务所有, 服务存活期间不会关闭
        if rx.changed().await.is_err() {
            return;
        }
    }
}
