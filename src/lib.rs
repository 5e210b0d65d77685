#![no_std]

//! 侵入式双向循环链表库
//!
//! 节点嵌入宿主结构体使用，链表只维护链接关系，节点内存完全由
//! 调用者管理。头插、头摘，整体表现为 LIFO。

#[cfg(test)]
extern crate std;

pub mod list;
pub mod utils;

pub use list::{ListError, ListHead, ListNode, ListResult, RemoveOutcome};
