//! Abstract Syntax Tree (AST) types for SELECT statements.
//!
//! Every node prints back as canonical SQL through `Display`.

mod condition;
mod statement;

pub use condition::{ArithOp, CompareOp, ConditionList, ConditionToken, LogicalOp, Operand};
pub use statement::{
    ColumnRef, Compound, FromClause, FromItem, Literal, OrderByClause, OrderDirection, OrderItem,
    OrderKey, SelectClause, SelectItem, SelectList, SelectStatement, SetOperator, TableSource,
    WhereClause,
};
