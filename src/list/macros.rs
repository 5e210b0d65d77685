//! 宿主结构体定位与遍历宏

/// 由成员指针反推宿主结构体指针
///
/// `$ptr` 必须指向 `$type` 类型某个实例的 `$field` 成员，且
/// `$type` 为 `#[repr(C)]`。不做任何运行时检查，误用是未定义行为。
#[macro_export]
macro_rules! container_of {
    ($ptr:expr, $type:ty, $($field:ident).+) => {{
        (($ptr) as usize - ::core::mem::offset_of!($type, $($field).+)) as *mut $type
    }};
}

/// 遍历链表中的每个宿主结构体
///
/// 只读遍历：`$code` 不得插入或摘除节点。空链表不执行 `$code`。
#[macro_export]
macro_rules! list_for_each_entry {
    ($item:ident, $head:expr, $type:ty, $($field:ident).+, $code:block) => {
        unsafe {
            let first_node__ = ($head).first();
            if !first_node__.is_null() {
                let mut cur_node__ = first_node__;
                loop {
                    let $item: *mut $type = $crate::container_of!(cur_node__, $type, $($field).+);
                    $code
                    cur_node__ = (*cur_node__).next;
                    if cur_node__ == first_node__ {
                        break;
                    }
                }
            }
        }
    };
}
