// region:    --- Imports
use crate::api::ApiClient;
use crate::auth::model::Session;
use crate::customer::model::Customer;
use crate::error::{DashboardError, Result};
use crate::table::pagination::PageSize;
use crate::table::TableState;
use tracing::{error, info};

// endregion: --- Imports

// region:    --- Customers View
/// 고객 테이블
#[derive(Debug, Clone)]
pub struct CustomersView {
    table: TableState<Customer>,
}

impl CustomersView {
    pub fn new(page_size: PageSize) -> Self {
        Self {
            table: TableState::new(page_size),
        }
    }

    pub fn table(&self) -> &TableState<Customer> {
        &self.table
    }

    pub fn table_mut(&mut self) -> &mut TableState<Customer> {
        &mut self.table
    }

    /// 고객 목록 다시 조회. 실패 시 기존 행 유지
    pub async fn refresh(&mut self, api: &ApiClient, session: &Session) -> Result<()> {
        match api
            .with_token(&session.token)
            .fetch_customers(&session.user_id)
            .await
        {
            Ok(customers) => {
                info!("{:<12} --> 고객 {}명 조회", "Customers", customers.len());
                self.table.replace_rows(customers);
                Ok(())
            }
            Err(e) => {
                error!("{:<12} --> 고객 목록 조회 실패: {}", "Customers", e);
                Err(e.into())
            }
        }
    }

    /// 고객 삭제. 서버가 성공을 돌려준 경우에만 행 제거
    pub async fn delete(
        &mut self,
        api: &ApiClient,
        session: &Session,
        customer_id: &str,
    ) -> Result<Customer> {
        if self.table.find(customer_id).is_none() {
            return Err(DashboardError::RowNotFound(customer_id.to_string()));
        }

        let outcome = api
            .with_token(&session.token)
            .delete_customer(customer_id)
            .await
            .map_err(|e| {
                error!("{:<12} --> 고객 삭제 오류: {}", "Customers", e);
                DashboardError::from(e)
            })?;

        if !outcome.success {
            error!("{:<12} --> 고객 삭제 실패 id: {}", "Customers", customer_id);
            return Err(DashboardError::DeleteRejected(customer_id.to_string()));
        }

        let removed = self
            .table
            .remove_row(customer_id)
            .ok_or_else(|| DashboardError::RowNotFound(customer_id.to_string()))?;
        info!("{:<12} --> 고객 삭제 완료: {}", "Customers", removed.full_name);
        Ok(removed)
    }
}

// endregion: --- Customers View
