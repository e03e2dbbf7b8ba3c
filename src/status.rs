//! Human-readable descriptions for known HTTP status codes.
//!
//! Used as a fallback label source when a failed response carries no
//! usable message of its own. The table is constant for the process.

/// Returns the built-in description for `status`, if one is known.
pub fn status_message(status: u16) -> Option<&'static str> {
    match status {
        200 => Some("服务器成功返回请求的数据。"),
        201 => Some("新建或修改数据成功。"),
        202 => Some("一个请求已经进入后台排队（异步任务）。"),
        204 => Some("删除数据成功。"),
        400 => Some("发出的请求有错误，服务器没有进行新建或修改数据的操作。"),
        401 => Some("用户没有权限（令牌、用户名、密码错误）。"),
        403 => Some("用户得到授权，但是访问是被禁止的。"),
        404 => Some("发出的请求针对的是不存在的记录，服务器没有进行操作。"),
        405 => Some("请求方法不被允许。"),
        406 => Some("请求的格式不可得。"),
        410 => Some("请求的资源被永久删除，且不会再得到的。"),
        422 => Some("当创建一个对象时，发生一个验证错误。"),
        500 => Some("服务器发生错误，请检查服务器。"),
        502 => Some("网关错误。"),
        503 => Some("服务不可用，服务器暂时过载或维护。"),
        504 => Some("网关超时。"),
        _ => None,
    }
}
