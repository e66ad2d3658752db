//! Welcome email content.

/// Subject line for the welcome email.
pub const WELCOME_SUBJECT: &str = "\u{1F3AF} Welcome to Goal Tracker Pro!";

/// Plain-text body of the welcome email.
pub fn welcome_text(user_name: &str) -> String {
    format!(
        "Welcome to Goal Tracker Pro, {user_name}!\n\
         \n\
         Congratulations on taking the first step towards achieving your goals!\n\
         \n\
         What you can do now:\n\
         - Create Goals: set weekly or monthly goals with target days\n\
         - Track Progress: mark daily progress and build streaks\n\
         - Visualize Success: view charts of your progress\n\
         - Stay Motivated: monitor streaks and completion rates\n\
         \n\
         Pro tips for success:\n\
         - Start with small, achievable goals\n\
         - Be consistent: even small daily actions count\n\
         - Use the progress charts to stay motivated\n\
         \n\
         Your account is protected with encrypted passwords and secure\n\
         authentication. We never share your personal information.\n\
         \n\
         Goal Tracker Pro - Achieve More, Track Better\n"
    )
}

/// HTML body of the welcome email.
pub fn welcome_html(user_name: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="UTF-8">
  <title>Welcome to Goal Tracker Pro</title>
</head>
<body style="font-family: 'Segoe UI', Arial, sans-serif; color: #333; background-color: #f8fafc; margin: 0; padding: 20px;">
  <div style="max-width: 600px; margin: 0 auto; background-color: #ffffff; border-radius: 10px; padding: 20px;">
    <div style="background: linear-gradient(135deg, #4f46e5 0%, #6366f1 100%); color: white; padding: 30px; text-align: center; border-radius: 10px;">
      <h1 style="margin: 0;">&#127919; Welcome to Goal Tracker Pro!</h1>
      <p style="margin: 10px 0 0 0;">Your journey to success starts here</p>
    </div>
    <h2>Hello {user_name}!</h2>
    <p>Congratulations on taking the first step towards achieving your goals!
       We're excited to have you join our community of goal achievers.</p>
    <div style="background: #f8fafc; padding: 20px; margin: 20px 0; border-radius: 8px; border-left: 4px solid #4f46e5;">
      <h3>&#128640; What you can do now</h3>
      <ul>
        <li><strong>Create Goals:</strong> set weekly or monthly goals with target days</li>
        <li><strong>Track Progress:</strong> mark daily progress and build streaks</li>
        <li><strong>Visualize Success:</strong> view charts of your progress</li>
        <li><strong>Stay Motivated:</strong> monitor streaks and completion rates</li>
      </ul>
    </div>
    <div style="background: #f8fafc; padding: 20px; margin: 20px 0; border-radius: 8px; border-left: 4px solid #4f46e5;">
      <h3>&#128161; Pro tips for success</h3>
      <ul>
        <li>Start with small, achievable goals</li>
        <li>Be consistent: even small daily actions count</li>
        <li>Use the progress charts to stay motivated</li>
      </ul>
    </div>
    <p style="color: #64748b; font-size: 14px; text-align: center; margin-top: 40px;">
      <strong>Goal Tracker Pro</strong> - Achieve More, Track Better<br>
      This email was sent because you registered for Goal Tracker Pro.<br>
      If you didn't create this account, please ignore this email.
    </p>
  </div>
</body>
</html>
"#
    )
}
