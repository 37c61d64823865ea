//! Report Queries - naplo 报表与健康检查

/// 按州统计地震次数
#[derive(Debug, Clone)]
pub struct CountQuakesByCounty;

/// 获取最大震级的所有日志行
#[derive(Debug, Clone)]
pub struct GetMaxMagnitudeEntries;

/// 数据库探活
#[derive(Debug, Clone)]
pub struct CheckDatabaseHealth;
