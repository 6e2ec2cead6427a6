use crate::shared::dispatch::contracts::Command;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeletePizza {
    pub id: i64,
}

impl Command for DeletePizza {
    const NAME: &'static str = "DeletePizza";
    type Output = ();
}
