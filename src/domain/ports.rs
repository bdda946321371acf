use crate::domain::model::SessionPlan;
use crate::utils::error::Result;

/// 帳戶訊息的輸出端
pub trait Console {
    fn write_line(&self, line: &str);
}

impl<C: Console + ?Sized> Console for &C {
    fn write_line(&self, line: &str) {
        (**self).write_line(line)
    }
}

pub trait ConfigProvider {
    fn session_plan(&self) -> Result<SessionPlan>;
}
