//! Redshift backend over the PostgreSQL wire protocol.
//!
//! Opens a fresh connection for every query and drops it once the rows are
//! read. Redshift speaks the Postgres protocol, so `tokio-postgres` talks to it
//! directly; `$n` placeholders are bound server side. Catalog queries cast
//! numeric results to `int8`/`float8`, so `NUMERIC` columns are reported as
//! unsupported rather than decoded.

use crate::error::{Result, WarehouseError};
use crate::query::{Param, Query};
use bbs_core::config::RedshiftSettings;
use bbs_core::{Cell, Frame};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use tokio_postgres::types::{ToSql, Type};
use tokio_postgres::{Column, NoTls, Row};

#[derive(Clone, Debug)]
pub struct RedshiftWarehouse {
    settings: RedshiftSettings,
}

impl RedshiftWarehouse {
    pub fn new(settings: RedshiftSettings) -> Self {
        Self { settings }
    }

    fn config(&self) -> tokio_postgres::Config {
        let mut config = tokio_postgres::Config::new();
        config
            .host(&self.settings.host)
            .port(self.settings.port)
            .dbname(&self.settings.database)
            .user(&self.settings.user)
            .password(&self.settings.password);
        config
    }

    pub async fn fetch(&self, query: &Query) -> Result<Frame> {
        let (client, connection) = self
            .config()
            .connect(NoTls)
            .await
            .map_err(|e| WarehouseError::Connect(e.to_string()))?;

        let host = self.settings.host.clone();
        tokio::spawn(async move {
            if let Err(e) = connection.await {
                log::error!("[BBS Debug] redshift: connection to {} closed with error: {}", host, e);
            }
        });

        let statement = client.prepare(&query.sql).await?;
        let columns = statement.columns();
        let params: Vec<&(dyn ToSql + Sync)> = query.params.iter().map(as_tosql).collect();
        let rows = client.query(&statement, &params).await?;

        let mut frame = Frame::new(columns.iter().map(|c| c.name().to_string()).collect());
        for row in &rows {
            frame.rows.push(row_cells(row, columns)?);
        }
        Ok(frame)
    }
}

fn as_tosql(param: &Param) -> &(dyn ToSql + Sync) {
    match param {
        Param::Text(v) => v,
        Param::Int(v) => v,
        Param::Float(v) => v,
    }
}

fn row_cells(row: &Row, columns: &[Column]) -> Result<Vec<Cell>> {
    let mut cells = Vec::with_capacity(columns.len());
    for (idx, col) in columns.iter().enumerate() {
        let ty = col.type_();
        let cell = match *ty {
            Type::BOOL => row
                .try_get::<_, Option<bool>>(idx)?
                .map(|v| Cell::Int(v as i64)),
            Type::INT2 => row.try_get::<_, Option<i16>>(idx)?.map(|v| Cell::Int(v as i64)),
            Type::INT4 => row.try_get::<_, Option<i32>>(idx)?.map(|v| Cell::Int(v as i64)),
            Type::INT8 => row.try_get::<_, Option<i64>>(idx)?.map(Cell::Int),
            Type::FLOAT4 => row
                .try_get::<_, Option<f32>>(idx)?
                .map(|v| Cell::Float(v as f64)),
            Type::FLOAT8 => row.try_get::<_, Option<f64>>(idx)?.map(Cell::Float),
            Type::TEXT | Type::VARCHAR | Type::BPCHAR | Type::NAME => {
                row.try_get::<_, Option<String>>(idx)?.map(Cell::Text)
            }
            Type::DATE => row
                .try_get::<_, Option<NaiveDate>>(idx)?
                .map(|d| Cell::Text(d.format("%Y-%m-%d").to_string())),
            Type::TIMESTAMP => row
                .try_get::<_, Option<NaiveDateTime>>(idx)?
                .map(|ts| Cell::Text(ts.format("%Y-%m-%d %H:%M:%S").to_string())),
            Type::TIMESTAMPTZ => row
                .try_get::<_, Option<DateTime<Utc>>>(idx)?
                .map(|ts| Cell::Text(ts.format("%Y-%m-%d %H:%M:%S").to_string())),
            _ => {
                return Err(WarehouseError::UnsupportedType {
                    column: col.name().to_string(),
                    ty: ty.to_string(),
                })
            }
        };
        cells.push(cell.unwrap_or(Cell::Null));
    }
    Ok(cells)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_postgres::types::FromSql;

    #[test]
    fn numeric_columns_are_rejected() {
        assert!(!<f64 as FromSql>::accepts(&Type::NUMERIC));
    }

    #[tokio::test]
    async fn unreachable_host_is_connect_error() {
        let wh = RedshiftWarehouse::new(RedshiftSettings {
            host: "127.0.0.1".into(),
            port: 1,
            database: "dev".into(),
            user: "u".into(),
            password: "p".into(),
        });
        let err = wh
            .fetch(&crate::catalog::city_rides(crate::query::Dialect::Postgres))
            .await
            .unwrap_err();
        assert!(matches!(err, WarehouseError::Connect(_)));
    }
}
